//! Core types for the placement engine

use crate::words::{Tile, Word};

/// Axis a word runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Order in which orientations are tried at each intersection
    pub const TRY_ORDER: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    /// Unit step along the axis as (dx, dy)
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A grid cell already holding a letter that also appears in the candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    /// Position of the shared letter within the word
    pub letter_index: usize,
}

impl Candidate {
    pub fn new(x: usize, y: usize, letter_index: usize) -> Self {
        Self { x, y, letter_index }
    }
}

/// One cell of a projected run. Coordinates are signed because a projection
/// may fall off the grid before it is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCell {
    pub x: isize,
    pub y: isize,
    pub tile: Tile,
}

/// The full sequence of cells one word would occupy at one candidate in one orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRun {
    pub orientation: Orientation,
    pub cells: Vec<RunCell>,
}

impl PlacementRun {
    /// First cell of the run
    pub fn start(&self) -> Option<&RunCell> {
        self.cells.first()
    }
}

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Word,
    /// Cell of the first tile
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
    /// Cell where the word crossed the existing board; None for the seed word
    pub crossing: Option<(usize, usize)>,
}

impl Placement {
    /// Cells covered by the word, in tile order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = match self.orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        };
        (0..self.word.len()).map(move |i| (self.x + i * dx, self.y + i * dy))
    }

    /// Last cell covered by the word
    pub fn end(&self) -> (usize, usize) {
        let last = self.word.len().saturating_sub(1);
        match self.orientation {
            Orientation::Horizontal => (self.x + last, self.y),
            Orientation::Vertical => (self.x, self.y + last),
        }
    }

    pub fn is_seed(&self) -> bool {
        self.crossing.is_none()
    }
}

/// An occupied cell in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
}

/// Inclusive rectangle of occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl GridBounds {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge, exclusive
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Bottom edge, exclusive
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest bounds containing both
    pub fn union(&self, other: &GridBounds) -> GridBounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        GridBounds::new(x, y, right - x, bottom - y)
    }

    /// Smallest bounds covering every cell, None when there are no cells
    pub fn enclosing<I>(cells: I) -> Option<GridBounds>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        cells
            .into_iter()
            .map(|(x, y)| GridBounds::new(x, y, 1, 1))
            .reduce(|acc, b| acc.union(&b))
    }
}

/// A snapshot of the board, enough to render it without knowing placement internals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    /// Occupied cells in row-major order
    pub tiles: Vec<PlacedTile>,
    /// Committed words in commit order, seed first
    pub placements: Vec<Placement>,
}

impl Layout {
    /// Tile at a cell, if occupied
    pub fn tile_at(&self, x: usize, y: usize) -> Option<Tile> {
        self.tiles
            .binary_search_by_key(&(y, x), |t| (t.y, t.x))
            .ok()
            .map(|i| self.tiles[i].tile)
    }

    /// Same as `tile_at` but accepting off-grid coordinates
    pub fn tile_at_signed(&self, x: isize, y: isize) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.tile_at(x as usize, y as usize)
    }

    /// Bounding rectangle of all occupied cells, None for an empty board
    pub fn bounds(&self) -> Option<GridBounds> {
        GridBounds::enclosing(self.tiles.iter().map(|t| (t.x, t.y)))
    }

    /// Read a placed word back off the board
    pub fn word_at(&self, placement: &Placement) -> String {
        placement
            .cells()
            .map(|(x, y)| self.tile_at(x, y).map(|t| t.as_char()).unwrap_or('.'))
            .collect()
    }

    /// Text of every committed word
    pub fn placed_words(&self) -> Vec<&str> {
        self.placements.iter().map(|p| p.word.text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with(tiles: &[(usize, usize, char)]) -> Layout {
        let mut tiles: Vec<PlacedTile> = tiles
            .iter()
            .map(|&(x, y, c)| PlacedTile {
                x,
                y,
                tile: Tile::from_char(c).unwrap(),
            })
            .collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        Layout {
            width: 10,
            height: 10,
            tiles,
            placements: vec![],
        }
    }

    #[test]
    fn test_orientation_perpendicular() {
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.step(), (0, 1));
    }

    #[test]
    fn test_placement_cells() {
        let placement = Placement {
            word: Word::new("TAB").unwrap(),
            x: 3,
            y: 2,
            orientation: Orientation::Vertical,
            crossing: Some((3, 2)),
        };
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(cells, vec![(3, 2), (3, 3), (3, 4)]);
        assert_eq!(placement.end(), (3, 4));
        assert!(!placement.is_seed());
    }

    #[test]
    fn test_layout_bounds() {
        let layout = layout_with(&[(2, 3, 'C'), (3, 3, 'A'), (4, 3, 'T'), (4, 5, 'B')]);
        assert_eq!(layout.bounds(), Some(GridBounds::new(2, 3, 3, 3)));
        assert_eq!(layout.tile_at(4, 5), Some(Tile::Letter('B')));
        assert_eq!(layout.tile_at(0, 0), None);
        assert_eq!(layout.tile_at_signed(-1, 3), None);
    }

    #[test]
    fn test_empty_layout_has_no_bounds() {
        assert_eq!(layout_with(&[]).bounds(), None);
    }

    #[test]
    fn test_bounds_union() {
        let a = GridBounds::new(0, 0, 2, 2);
        let b = GridBounds::new(3, 1, 1, 4);
        assert_eq!(a.union(&b), GridBounds::new(0, 0, 4, 5));
        assert!(a.contains(1, 1));
        assert!(!a.contains(2, 0));
    }

    #[test]
    fn test_enclosing_cells() {
        let cells = [(4, 1), (2, 3), (3, 2)];
        assert_eq!(GridBounds::enclosing(cells), Some(GridBounds::new(2, 1, 3, 3)));
        assert_eq!(GridBounds::enclosing(std::iter::empty()), None);
    }
}
