//! Writing words onto the grid

use crate::words::Word;

use super::error::GenerationError;
use super::grid::Grid;
use super::types::{Candidate, Orientation, Placement, PlacementRun};

/// Write a validated run into the grid and describe what was placed.
///
/// Validity is not re-checked here.
pub fn commit_run(
    grid: &mut Grid,
    word: &Word,
    run: &PlacementRun,
    candidate: &Candidate,
) -> Placement {
    for cell in &run.cells {
        grid.set(cell.x, cell.y, cell.tile);
    }
    let (x, y) = run
        .start()
        .map(|c| (c.x.max(0) as usize, c.y.max(0) as usize))
        .unwrap_or((candidate.x, candidate.y));

    Placement {
        word: word.clone(),
        x,
        y,
        orientation: run.orientation,
        crossing: Some((candidate.x, candidate.y)),
    }
}

/// Seed cell for the first word: horizontally centred on the middle row
pub fn seed_origin(grid: &Grid, word: &Word) -> Result<(usize, usize), GenerationError> {
    if word.len() > grid.width() || grid.height() == 0 {
        return Err(GenerationError::grid_too_small(
            word.text(),
            grid.width(),
            grid.height(),
        ));
    }
    Ok(((grid.width() - word.len()) / 2, grid.height() / 2))
}

/// Place the seed word unconditionally, without validation
pub fn place_seed(grid: &mut Grid, word: &Word) -> Result<Placement, GenerationError> {
    let (x, y) = seed_origin(grid, word)?;
    for (i, tile) in word.tiles().iter().enumerate() {
        grid.set((x + i) as isize, y as isize, *tile);
    }
    Ok(Placement {
        word: word.clone(),
        x,
        y,
        orientation: Orientation::Horizontal,
        crossing: None,
    })
}
