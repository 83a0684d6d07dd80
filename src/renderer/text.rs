//! Plain-text board rendering for terminals and logs

use crate::layout::Layout;
use crate::words::Tile;

/// Marker for a cell with no tile
pub const EMPTY_CELL: char = '.';

/// Marker for a blank tile
pub const BLANK_TILE: char = '_';

/// Render the occupied area of a board, one text line per row
pub fn render_text(layout: &Layout) -> String {
    let Some(bounds) = layout.bounds() else {
        return String::new();
    };

    (bounds.y..bounds.bottom())
        .map(|y| {
            (bounds.x..bounds.right())
                .map(|x| match layout.tile_at(x, y) {
                    Some(Tile::Letter(c)) => c,
                    Some(Tile::Blank) => BLANK_TILE,
                    None => EMPTY_CELL,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PlacedTile;

    #[test]
    fn test_render_crossing() {
        let tiles = [(1, 1, 'C'), (2, 1, 'A'), (3, 1, 'T'), (3, 2, 'O'), (3, 3, 'P')];
        let layout = Layout {
            width: 6,
            height: 6,
            tiles: tiles
                .iter()
                .map(|&(x, y, c)| PlacedTile {
                    x,
                    y,
                    tile: Tile::from_char(c).unwrap(),
                })
                .collect(),
            placements: vec![],
        };
        assert_eq!(render_text(&layout), "CAT\n..O\n..P");
    }

    #[test]
    fn test_render_blank() {
        let layout = Layout {
            width: 3,
            height: 1,
            tiles: vec![
                PlacedTile { x: 0, y: 0, tile: Tile::Letter('A') },
                PlacedTile { x: 1, y: 0, tile: Tile::Blank },
                PlacedTile { x: 2, y: 0, tile: Tile::Letter('B') },
            ],
            placements: vec![],
        };
        assert_eq!(render_text(&layout), "A_B");
    }

    #[test]
    fn test_render_empty() {
        let layout = Layout {
            width: 3,
            height: 3,
            tiles: vec![],
            placements: vec![],
        };
        assert_eq!(render_text(&layout), "");
    }
}
