//! Lint engine for detecting placement defects in a finished board.
//!
//! Re-checks the placement rules against a snapshot: committed words must
//! agree on shared cells, read back intact, not touch other tiles at either
//! end, and not run alongside other tiles outside their crossings. A tile
//! past either end is accepted when a longer word on the same line covers
//! the whole word, which is how a word laid over a shorter one looks.

use std::collections::HashMap;
use std::fmt;

use crate::words::Tile;

use super::types::{Layout, Orientation, Placement};

/// A lint warning about a placement defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    /// Two words disagree on a shared cell
    Conflict,
    /// A word does not read back from the board
    Readback,
    /// A tile sits directly before or after a word
    Abutting,
    /// A tile sits beside a word cell that no other word crosses
    SideContact,
    /// A tile belongs to no word
    Orphan,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Conflict => write!(f, "conflict"),
            LintCategory::Readback => write!(f, "readback"),
            LintCategory::Abutting => write!(f, "abutting"),
            LintCategory::SideContact => write!(f, "side-contact"),
            LintCategory::Orphan => write!(f, "orphan"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a board.
pub fn check(layout: &Layout) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let coverage = build_coverage(layout, &mut warnings);
    check_readback(layout, &mut warnings);
    check_ends(layout, &mut warnings);
    check_sides(layout, &coverage, &mut warnings);
    check_orphans(layout, &coverage, &mut warnings);
    warnings
}

/// Count how many words cover each cell, flagging words that disagree on a cell
fn build_coverage(
    layout: &Layout,
    warnings: &mut Vec<LintWarning>,
) -> HashMap<(usize, usize), usize> {
    let mut written: HashMap<(usize, usize), (Tile, &str)> = HashMap::new();
    let mut coverage = HashMap::new();

    for placement in &layout.placements {
        for (cell, tile) in placement.cells().zip(placement.word.tiles()) {
            *coverage.entry(cell).or_insert(0) += 1;
            match written.get(&cell) {
                Some((other, owner)) if !other.matches(tile) => warnings.push(LintWarning {
                    category: LintCategory::Conflict,
                    message: format!(
                        "'{}' and '{}' disagree at ({}, {}): '{}' vs '{}'",
                        owner,
                        placement.word,
                        cell.0,
                        cell.1,
                        other,
                        tile
                    ),
                }),
                Some(_) => {}
                None => {
                    written.insert(cell, (*tile, placement.word.text()));
                }
            }
        }
    }
    coverage
}

fn check_readback(layout: &Layout, warnings: &mut Vec<LintWarning>) {
    for placement in &layout.placements {
        let read = layout.word_at(placement);
        if read != placement.word.text() {
            warnings.push(LintWarning {
                category: LintCategory::Readback,
                message: format!("'{}' reads back as '{}'", placement.word, read),
            });
        }
    }
}

fn check_ends(layout: &Layout, warnings: &mut Vec<LintWarning>) {
    for placement in &layout.placements {
        let (dx, dy) = placement.orientation.step();
        let (sx, sy) = (placement.x as isize, placement.y as isize);
        let (ex, ey) = placement.end();
        let (ex, ey) = (ex as isize, ey as isize);

        let before = (sx - dx, sy - dy);
        let after = (ex + dx, ey + dy);
        if layout.tile_at_signed(before.0, before.1).is_some()
            && !overlaid(layout, placement, before)
        {
            warnings.push(abutting(placement, "start"));
        }
        if layout.tile_at_signed(after.0, after.1).is_some() && !overlaid(layout, placement, after)
        {
            warnings.push(abutting(placement, "end"));
        }
    }
}

/// Whether a longer word on the same line covers the whole placement and runs on into `cell`
fn overlaid(layout: &Layout, placement: &Placement, cell: (isize, isize)) -> bool {
    let (Ok(x), Ok(y)) = (usize::try_from(cell.0), usize::try_from(cell.1)) else {
        return false;
    };
    let start = (placement.x, placement.y);
    let end = placement.end();
    layout.placements.iter().any(|other| {
        other.orientation == placement.orientation
            && other.word.len() > placement.word.len()
            && other.cells().any(|c| c == (x, y))
            && other.cells().any(|c| c == start)
            && other.cells().any(|c| c == end)
    })
}

fn abutting(placement: &Placement, which: &str) -> LintWarning {
    LintWarning {
        category: LintCategory::Abutting,
        message: format!(
            "'{}' at ({}, {}) has a tile touching its {}",
            placement.word, placement.x, placement.y, which
        ),
    }
}

fn check_sides(
    layout: &Layout,
    coverage: &HashMap<(usize, usize), usize>,
    warnings: &mut Vec<LintWarning>,
) {
    for placement in &layout.placements {
        let (px, py) = perpendicular_step(placement.orientation);
        for (x, y) in placement.cells() {
            if coverage.get(&(x, y)).copied().unwrap_or(0) > 1 {
                continue;
            }
            let (sx, sy) = (x as isize, y as isize);
            let touching = layout.tile_at_signed(sx - px, sy - py).is_some()
                || layout.tile_at_signed(sx + px, sy + py).is_some();
            if touching {
                warnings.push(LintWarning {
                    category: LintCategory::SideContact,
                    message: format!("'{}' runs alongside a tile at ({}, {})", placement.word, x, y),
                });
            }
        }
    }
}

fn perpendicular_step(orientation: Orientation) -> (isize, isize) {
    orientation.perpendicular().step()
}

fn check_orphans(
    layout: &Layout,
    coverage: &HashMap<(usize, usize), usize>,
    warnings: &mut Vec<LintWarning>,
) {
    for tile in &layout.tiles {
        if !coverage.contains_key(&(tile.x, tile.y)) {
            warnings.push(LintWarning {
                category: LintCategory::Orphan,
                message: format!("tile '{}' at ({}, {}) belongs to no word", tile.tile, tile.x, tile.y),
            });
        }
    }
}
