//! Scheduler: moves words from the queue onto the board one step at a time
//!
//! Each step dequeues one word, searches its shuffled intersections for the
//! first valid run (vertical before horizontal), and either commits it or
//! sends the word to the back of the queue. A run ends when the queue is
//! empty, when the attempt budget is used up, or when a full pass over the
//! queue places nothing.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::words::{Word, WordList};

use super::commit::{commit_run, place_seed};
use super::config::GenerationConfig;
use super::error::{GenerationError, PlacementFailure};
use super::grid::Grid;
use super::intersect::shuffled_intersections;
use super::types::{Candidate, Layout, Placement, PlacementRun};
use super::validate::first_valid;

/// Why a run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    IterationBudgetExhausted,
    StuckNoProgress,
}

/// Status of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    /// Every word is on the board
    Succeeded,
    Failed {
        reason: FailureReason,
        unplaced: Vec<String>,
    },
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// What a single step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Placed(Placement),
    Requeued {
        word: String,
        reason: PlacementFailure,
    },
    Finished(RunStatus),
}

/// Everything one generation run owns: the grid, the queue, and the bookkeeping
#[derive(Debug, Clone)]
pub struct GenerationState {
    grid: Grid,
    queue: VecDeque<Word>,
    placements: Vec<Placement>,
    attempts: usize,
    budget: usize,
    failures_since_progress: usize,
    status: RunStatus,
}

impl GenerationState {
    /// Allocate the grid, place the seed word, and order the queue
    pub fn new(words: &WordList, config: &GenerationConfig) -> Result<Self, GenerationError> {
        let (seed, rest) = words
            .words()
            .split_first()
            .ok_or(GenerationError::EmptyWordList)?;

        let (width, height) = config.grid_dimensions(words.total_tiles());
        let mut grid = Grid::new(width, height);
        let seed_placement = place_seed(&mut grid, seed)?;

        let queue = order_queue(rest, config.preserve_order);
        let budget = config.budget_per_word.saturating_mul(queue.len());

        debug!(
            width,
            height,
            seed = seed.text(),
            queued = queue.len(),
            budget,
            "generation state ready"
        );

        Ok(Self {
            grid,
            queue,
            placements: vec![seed_placement],
            attempts: 0,
            budget,
            failures_since_progress: 0,
            status: RunStatus::Running,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words still waiting, in queue order
    pub fn queue(&self) -> impl Iterator<Item = &Word> {
        self.queue.iter()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement attempts made so far (the seed does not count)
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Text of every word not yet placed
    pub fn unplaced(&self) -> Vec<String> {
        self.queue.iter().map(|w| w.text().to_string()).collect()
    }

    pub fn snapshot(&self) -> Layout {
        self.grid.snapshot(&self.placements)
    }

    /// Convert the state into the run result. A run still in progress yields its current board.
    pub fn into_result(self) -> Result<Layout, GenerationError> {
        let layout = self.snapshot();
        match self.status {
            RunStatus::Running | RunStatus::Succeeded => Ok(layout),
            RunStatus::Failed { reason, unplaced } => {
                let partial = Box::new(layout);
                Err(match reason {
                    FailureReason::IterationBudgetExhausted => {
                        GenerationError::IterationBudgetExhausted {
                            attempts: self.attempts,
                            unplaced,
                            partial,
                        }
                    }
                    FailureReason::StuckNoProgress => GenerationError::StuckNoProgress {
                        attempts: self.attempts,
                        unplaced,
                        partial,
                    },
                })
            }
        }
    }

    fn finish(&mut self, status: RunStatus) -> StepEvent {
        match &status {
            RunStatus::Failed { reason, unplaced } => warn!(
                ?reason,
                attempts = self.attempts,
                unplaced = %unplaced.join(", "),
                "generation failed"
            ),
            _ => info!(
                placed = self.placements.len(),
                attempts = self.attempts,
                "all words placed"
            ),
        }
        self.status = status.clone();
        StepEvent::Finished(status)
    }

    fn fail(&mut self, reason: FailureReason) -> StepEvent {
        let unplaced = self.unplaced();
        self.finish(RunStatus::Failed { reason, unplaced })
    }

    /// One scheduler transition
    fn step<R: Rng + ?Sized>(&mut self, config: &GenerationConfig, rng: &mut R) -> StepEvent {
        if self.status.is_terminal() {
            return StepEvent::Finished(self.status.clone());
        }
        if config.detect_stuck
            && !self.queue.is_empty()
            && self.failures_since_progress >= self.queue.len()
        {
            return self.fail(FailureReason::StuckNoProgress);
        }
        if !self.queue.is_empty() && self.attempts >= self.budget {
            return self.fail(FailureReason::IterationBudgetExhausted);
        }
        let Some(word) = self.queue.pop_front() else {
            return self.finish(RunStatus::Succeeded);
        };

        self.attempts += 1;
        match try_place(&self.grid, &word, rng) {
            Ok((run, candidate)) => {
                let placement = commit_run(&mut self.grid, &word, &run, &candidate);
                debug!(
                    word = word.text(),
                    x = placement.x,
                    y = placement.y,
                    orientation = ?placement.orientation,
                    "placed"
                );
                self.placements.push(placement.clone());
                self.failures_since_progress = 0;
                StepEvent::Placed(placement)
            }
            Err(reason) => {
                debug!(word = word.text(), %reason, "requeued");
                let text = word.text().to_string();
                self.queue.push_back(word);
                self.failures_since_progress += 1;
                StepEvent::Requeued { word: text, reason }
            }
        }
    }
}

/// Order the words after the seed: the first `preserve` keep caller order,
/// the rest follow longest first (ties keep caller order).
pub fn order_queue(words: &[Word], preserve: usize) -> VecDeque<Word> {
    let (kept, rest) = words.split_at(preserve.min(words.len()));
    let mut sorted = rest.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    kept.iter().cloned().chain(sorted).collect()
}

/// Find the first valid run for a word over its shuffled candidates
fn try_place<R: Rng + ?Sized>(
    grid: &Grid,
    word: &Word,
    rng: &mut R,
) -> Result<(PlacementRun, Candidate), PlacementFailure> {
    let candidates = shuffled_intersections(word, grid, rng);
    if candidates.is_empty() {
        return Err(PlacementFailure::WordNeverIntersects);
    }
    candidates
        .iter()
        .find_map(|candidate| first_valid(grid, word, candidate).map(|run| (run, *candidate)))
        .ok_or(PlacementFailure::NoValidOrientation {
            candidates: candidates.len(),
        })
}

/// Drives a generation run step by step with an injected random source.
///
/// As an iterator it yields one `StepEvent` per step and ends after the
/// `Finished` event, so a caller can redraw between steps at its own pace.
pub struct Generator<R> {
    words: WordList,
    config: GenerationConfig,
    rng: R,
    state: GenerationState,
    done: bool,
}

impl<R: Rng> Generator<R> {
    pub fn new(words: WordList, config: GenerationConfig, rng: R) -> Result<Self, GenerationError> {
        let state = GenerationState::new(&words, &config)?;
        Ok(Self {
            words,
            config,
            rng,
            state,
            done: false,
        })
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn status(&self) -> &RunStatus {
        self.state.status()
    }

    /// Current board
    pub fn snapshot(&self) -> Layout {
        self.state.snapshot()
    }

    /// Perform one step. After the run has finished this keeps returning `Finished`.
    pub fn step(&mut self) -> StepEvent {
        self.state.step(&self.config, &mut self.rng)
    }

    /// Discard the board and queue and start over from the same words.
    /// The random source carries on, so the next run may lay out differently.
    pub fn restart(&mut self) -> Result<(), GenerationError> {
        self.state = GenerationState::new(&self.words, &self.config)?;
        self.done = false;
        Ok(())
    }

    /// Step until the run finishes
    pub fn run(mut self) -> Result<Layout, GenerationError> {
        while !self.state.status().is_terminal() {
            self.step();
        }
        self.state.into_result()
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let event = self.step();
        if matches!(event, StepEvent::Finished(_)) {
            self.done = true;
        }
        Some(event)
    }
}

impl<R: Rng> FusedIterator for Generator<R> {}

/// Lay out every word, or fail with the words left over
#[instrument(level = "debug", skip_all, fields(words = words.len()))]
pub fn generate<R: Rng>(
    words: &WordList,
    config: &GenerationConfig,
    rng: R,
) -> Result<Layout, GenerationError> {
    Generator::new(words.clone(), config.clone(), rng)?.run()
}
