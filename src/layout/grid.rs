//! Sparse, bounds-checked letter store
//!
//! Only occupied cells are stored, keyed by flat index so iteration stays in
//! row-major order. A per-letter index answers occurrence queries without
//! scanning the board.

use std::collections::{BTreeMap, HashMap};

use crate::words::Tile;

use super::types::{GridBounds, Layout, PlacedTile, Placement};

/// A fixed-size board addressed by `index = y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: BTreeMap<usize, Tile>,
    /// Flat indices of each letter, kept sorted
    letters: HashMap<char, Vec<usize>>,
}

impl Grid {
    /// Create an empty grid. Nothing is allocated per cell.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
            letters: HashMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index of an in-bounds cell
    pub fn index(&self, x: isize, y: isize) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Cell coordinates of a flat index
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at a cell; None when empty or out of bounds
    pub fn get(&self, x: isize, y: isize) -> Option<Tile> {
        self.index(x, y).and_then(|i| self.cells.get(&i).copied())
    }

    pub fn is_occupied(&self, x: isize, y: isize) -> bool {
        self.get(x, y).is_some()
    }

    /// Write a tile. Out-of-bounds writes are a no-op; returns whether the tile was written.
    pub fn set(&mut self, x: isize, y: isize, tile: Tile) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let previous = self.cells.insert(i, tile);
        if previous == Some(tile) {
            return true;
        }
        if let Some(c) = previous.and_then(|t| t.letter()) {
            if let Some(list) = self.letters.get_mut(&c) {
                list.retain(|&j| j != i);
                if list.is_empty() {
                    self.letters.remove(&c);
                }
            }
        }
        if let Some(c) = tile.letter() {
            let list = self.letters.entry(c).or_default();
            if let Err(pos) = list.binary_search(&i) {
                list.insert(pos, i);
            }
        }
        true
    }

    /// Flat indices of every cell holding `tile`, in row-major order.
    /// Blanks never match, so they have no occurrences.
    pub fn all_occurrences(&self, tile: Tile) -> Vec<usize> {
        tile.letter()
            .and_then(|c| self.letters.get(&c))
            .cloned()
            .unwrap_or_default()
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        self.cells.iter().map(|(&i, &tile)| {
            let (x, y) = self.coords(i);
            PlacedTile { x, y, tile }
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding rectangle of all occupied cells
    pub fn bounds(&self) -> Option<GridBounds> {
        GridBounds::enclosing(self.occupied().map(|t| (t.x, t.y)))
    }

    /// Take a snapshot of the grid alongside the placements that built it
    pub fn snapshot(&self, placements: &[Placement]) -> Layout {
        Layout {
            width: self.width,
            height: self.height,
            tiles: self.occupied().collect(),
            placements: placements.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(5, 4);
        let index = grid.index(3, 2).unwrap();
        assert_eq!(index, 13);
        assert_eq!(grid.coords(index), (3, 2));
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.index(0, -1), None);
    }

    #[test]
    fn test_out_of_bounds_write_is_noop() {
        let mut grid = Grid::new(3, 3);
        assert!(!grid.set(3, 1, Tile::Letter('A')));
        assert!(!grid.set(-1, 1, Tile::Letter('A')));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(1, 2, Tile::Letter('Q')));
        assert_eq!(grid.get(1, 2), Some(Tile::Letter('Q')));
        assert!(grid.is_occupied(1, 2));
        assert!(!grid.is_occupied(2, 1));
    }

    #[test]
    fn test_all_occurrences() {
        let mut grid = Grid::new(4, 2);
        grid.set(0, 0, Tile::Letter('A'));
        grid.set(3, 0, Tile::Letter('B'));
        grid.set(2, 1, Tile::Letter('A'));
        grid.set(1, 1, Tile::Blank);
        assert_eq!(grid.all_occurrences(Tile::Letter('A')), vec![0, 6]);
        assert!(grid.all_occurrences(Tile::Blank).is_empty());
    }

    #[test]
    fn test_occurrence_index_follows_writes() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, Tile::Letter('E'));
        grid.set(0, 0, Tile::Letter('E'));
        grid.set(2, 1, Tile::Letter('R'));
        assert_eq!(grid.all_occurrences(Tile::Letter('E')), vec![0, 24]);

        // same letter again changes nothing
        assert!(grid.set(0, 0, Tile::Letter('E')));
        assert_eq!(grid.all_occurrences(Tile::Letter('E')), vec![0, 24]);
        assert_eq!(grid.occupied_count(), 3);

        // a different tile moves the cell out of the old letter's list
        grid.set(4, 4, Tile::Letter('R'));
        assert_eq!(grid.all_occurrences(Tile::Letter('E')), vec![0]);
        assert_eq!(grid.all_occurrences(Tile::Letter('R')), vec![7, 24]);

        grid.set(0, 0, Tile::Blank);
        assert!(grid.all_occurrences(Tile::Letter('E')).is_empty());
        assert!(grid.all_occurrences(Tile::Blank).is_empty());
        assert_eq!(grid.occupied_count(), 3);

        let scanned: Vec<usize> = grid
            .occupied()
            .filter(|t| t.tile == Tile::Letter('R'))
            .filter_map(|t| grid.index(t.x as isize, t.y as isize))
            .collect();
        assert_eq!(scanned, grid.all_occurrences(Tile::Letter('R')));
    }

    #[test]
    fn test_large_grid_stores_only_occupied_cells() {
        let mut grid = Grid::new(100_000, 100_000);
        grid.set(99_999, 99_999, Tile::Letter('Z'));
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(
            grid.all_occurrences(Tile::Letter('Z')),
            vec![99_999 * 100_000 + 99_999]
        );
    }

    #[test]
    fn test_bounds_and_snapshot() {
        let mut grid = Grid::new(6, 6);
        grid.set(4, 1, Tile::Letter('X'));
        grid.set(2, 3, Tile::Letter('Y'));
        assert_eq!(grid.bounds(), Some(GridBounds::new(2, 1, 3, 3)));

        let layout = grid.snapshot(&[]);
        assert_eq!(layout.tiles.len(), 2);
        assert_eq!(layout.tiles[0].tile, Tile::Letter('X'));
        assert_eq!(layout.bounds(), grid.bounds());
    }

    #[test]
    fn test_empty_grid_has_no_bounds() {
        assert_eq!(Grid::new(2, 2).bounds(), None);
    }
}
