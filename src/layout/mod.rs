//! Placement engine for laying words out on the board
//!
//! This module takes a word list and builds a grid of crossing words,
//! producing a `Layout` snapshot with every placed tile and word.

pub mod commit;
pub mod config;
pub mod error;
pub mod grid;
pub mod intersect;
pub mod lint;
pub mod scheduler;
pub mod types;
pub mod validate;

pub use config::GenerationConfig;
pub use error::{GenerationError, PlacementFailure};
pub use grid::Grid;
pub use intersect::{find_intersections, shuffled_intersections};
pub use lint::{LintCategory, LintWarning};
pub use scheduler::{
    generate, FailureReason, GenerationState, Generator, RunStatus, StepEvent,
};
pub use types::*;
pub use validate::{check_run, first_valid, project, validate, CellConflict};
