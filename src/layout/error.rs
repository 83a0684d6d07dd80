//! Error types for the placement engine

use thiserror::Error;

use super::types::Layout;

/// Why a single attempt to place a word failed. Always recovered by re-queueing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementFailure {
    /// The word shares no letter with any tile on the board
    #[error("shares no letter with the board")]
    WordNeverIntersects,

    /// Every candidate was rejected in both orientations
    #[error("no valid orientation at any of {candidates} intersections")]
    NoValidOrientation { candidates: usize },
}

/// Errors that end a generation run
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No words supplied
    #[error("no words to place")]
    EmptyWordList,

    /// The seed word does not fit on the grid
    #[error("seed word '{word}' does not fit on a {width}x{height} grid")]
    GridTooSmall {
        word: String,
        width: usize,
        height: usize,
    },

    /// Attempt budget used up with words still unplaced
    #[error("iteration budget exhausted after {attempts} attempts; unplaced: {}", unplaced.join(", "))]
    IterationBudgetExhausted {
        attempts: usize,
        unplaced: Vec<String>,
        partial: Box<Layout>,
    },

    /// A full pass over the remaining words placed nothing
    #[error("no progress after {attempts} attempts; unplaced: {}", unplaced.join(", "))]
    StuckNoProgress {
        attempts: usize,
        unplaced: Vec<String>,
        partial: Box<Layout>,
    },
}

impl GenerationError {
    /// Create a grid too small error
    pub fn grid_too_small(word: impl Into<String>, width: usize, height: usize) -> Self {
        Self::GridTooSmall {
            word: word.into(),
            width,
            height,
        }
    }

    /// Words left unplaced when the run failed
    pub fn unplaced(&self) -> &[String] {
        match self {
            Self::IterationBudgetExhausted { unplaced, .. } => unplaced,
            Self::StuckNoProgress { unplaced, .. } => unplaced,
            _ => &[],
        }
    }

    /// The board as it stood when the run failed
    pub fn partial_layout(&self) -> Option<&Layout> {
        match self {
            Self::IterationBudgetExhausted { partial, .. } => Some(partial),
            Self::StuckNoProgress { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
