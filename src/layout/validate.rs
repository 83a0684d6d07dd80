//! Placement validation
//!
//! A run is projected from one intersection candidate along one axis and
//! accepted only if every cell passes all of these checks:
//!
//! - the cell is on the grid
//! - the cell is empty or already holds the same letter
//! - the cell before the first tile is empty
//! - the cell after the last tile is empty
//! - outside the crossing cell, both neighbours across the axis are empty

use std::fmt;

use crate::words::Word;

use super::grid::Grid;
use super::types::{Candidate, Orientation, PlacementRun, RunCell};

/// Why a cell rejected a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellConflict {
    OutOfBounds,
    /// Cell holds a different tile
    Overlap,
    /// Cell before the first tile is occupied
    HeadAbuts,
    /// Cell after the last tile is occupied
    TailAbuts,
    /// A neighbour across the axis is occupied
    SideContact,
}

impl fmt::Display for CellConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellConflict::OutOfBounds => write!(f, "out of bounds"),
            CellConflict::Overlap => write!(f, "overlaps a different tile"),
            CellConflict::HeadAbuts => write!(f, "word start touches a tile"),
            CellConflict::TailAbuts => write!(f, "word end touches a tile"),
            CellConflict::SideContact => write!(f, "runs alongside a tile"),
        }
    }
}

/// Project the word through the candidate along one axis.
///
/// The tile at `candidate.letter_index` lands on the candidate's own cell.
pub fn project(word: &Word, candidate: &Candidate, orientation: Orientation) -> PlacementRun {
    let (dx, dy) = orientation.step();
    let cx = candidate.x as isize;
    let cy = candidate.y as isize;
    let anchor = candidate.letter_index as isize;

    let cells = word
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            let offset = i as isize - anchor;
            RunCell {
                x: cx + offset * dx,
                y: cy + offset * dy,
                tile: *tile,
            }
        })
        .collect();

    PlacementRun { orientation, cells }
}

/// Check every cell of a run, returning the first conflict as (cell index, reason)
pub fn check_run(
    grid: &Grid,
    run: &PlacementRun,
    candidate: &Candidate,
) -> Result<(), (usize, CellConflict)> {
    let (dx, dy) = run.orientation.step();
    let (px, py) = run.orientation.perpendicular().step();
    let last = run.cells.len().saturating_sub(1);

    for (i, cell) in run.cells.iter().enumerate() {
        if !grid.in_bounds(cell.x, cell.y) {
            return Err((i, CellConflict::OutOfBounds));
        }

        if let Some(existing) = grid.get(cell.x, cell.y) {
            if !existing.matches(&cell.tile) {
                return Err((i, CellConflict::Overlap));
            }
        }

        if i == 0 && grid.is_occupied(cell.x - dx, cell.y - dy) {
            return Err((i, CellConflict::HeadAbuts));
        }

        if i == last && grid.is_occupied(cell.x + dx, cell.y + dy) {
            return Err((i, CellConflict::TailAbuts));
        }

        let is_crossing = cell.x == candidate.x as isize && cell.y == candidate.y as isize;
        if !is_crossing
            && (grid.is_occupied(cell.x - px, cell.y - py)
                || grid.is_occupied(cell.x + px, cell.y + py))
        {
            return Err((i, CellConflict::SideContact));
        }
    }

    Ok(())
}

/// Project and check a single orientation
pub fn validate(
    grid: &Grid,
    word: &Word,
    candidate: &Candidate,
    orientation: Orientation,
) -> Option<PlacementRun> {
    let run = project(word, candidate, orientation);
    match check_run(grid, &run, candidate) {
        Ok(()) => Some(run),
        Err((index, conflict)) => {
            tracing::trace!(
                word = word.text(),
                x = candidate.x,
                y = candidate.y,
                ?orientation,
                index,
                %conflict,
                "run rejected"
            );
            None
        }
    }
}

/// First valid run at a candidate, trying vertical before horizontal
pub fn first_valid(grid: &Grid, word: &Word, candidate: &Candidate) -> Option<PlacementRun> {
    Orientation::TRY_ORDER
        .iter()
        .find_map(|&orientation| validate(grid, word, candidate, orientation))
}
