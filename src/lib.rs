//! Scrabble Tiles - lay out a list of words as crossing tiles
//!
//! This library provides a word list reader, a placement engine that builds
//! a crossword-style board, and SVG/text renderers for the result.
//!
//! # Example
//!
//! ```rust
//! use scrabble_tiles::render;
//!
//! let svg = render("cat\ntab").unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod points;
pub mod renderer;
pub mod stylesheet;
pub mod words;

pub use error::InputError;
pub use layout::{
    generate, GenerationConfig, GenerationError, Generator, Layout, LintWarning, StepEvent,
};
pub use points::{LetterPoints, PointsError};
pub use renderer::{render_svg, render_svg_with_stylesheet, render_text, to_data_uri, SvgConfig};
pub use words::{parse_word_list, Tile, Word, WordList};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading the word list
    #[error("input errors: {}", format_input_errors(.0))]
    Input(Vec<InputError>),

    /// Error laying out the words
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Error loading a stylesheet
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    /// Error loading a points table
    #[error("points error: {0}")]
    Points(#[from] PointsError),
}

impl From<Vec<InputError>> for RenderError {
    fn from(errors: Vec<InputError>) -> Self {
        RenderError::Input(errors)
    }
}

fn format_input_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Placement configuration
    pub generation: GenerationConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for colour resolution
    pub stylesheet: Stylesheet,
    /// Point values printed on tiles
    pub points: LetterPoints,
    /// Seed for the candidate shuffle; a fresh random seed is used when unset
    pub seed: Option<u64>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placement configuration
    pub fn with_generation(mut self, config: GenerationConfig) -> Self {
        self.generation = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for colour resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the point table
    pub fn with_points(mut self, points: LetterPoints) -> Self {
        self.points = points;
        self
    }

    /// Fix the random seed for reproducible boards
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for one run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Render a word list to SVG with default configuration
///
/// This is the main entry point for the library. It reads the words, lays
/// them out, and generates SVG output.
///
/// # Example
///
/// ```rust
/// use scrabble_tiles::render;
///
/// let svg = render("family\nlove\nhome").unwrap_or_default();
/// // a run can fail to place every word; when it succeeds the board is SVG
/// assert!(svg.is_empty() || svg.contains("</svg>"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a word list to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use scrabble_tiles::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_seed(7)
///     .with_svg(SvgConfig::default().with_tile_size(20.0));
///
/// let svg = render_with_config("cat\ntop", config).unwrap();
/// assert!(svg.contains(">P</text>"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let words = parse_word_list(source)?;
    let layout = layout_words(&words, &config)?;
    Ok(render_svg_with_stylesheet(
        &layout,
        &config.svg,
        &config.stylesheet,
        &config.points,
    ))
}

/// Render a word list and run lint checks on the board
///
/// Returns the SVG together with any placement defects found on the board.
pub fn render_with_lint(
    source: &str,
    config: RenderConfig,
) -> Result<(String, Vec<LintWarning>), RenderError> {
    let words = parse_word_list(source)?;
    let layout = layout_words(&words, &config)?;
    let warnings = crate::layout::lint::check(&layout);
    let svg = render_svg_with_stylesheet(&layout, &config.svg, &config.stylesheet, &config.points);
    Ok((svg, warnings))
}

/// Lay out an already-parsed word list
pub fn layout_words(words: &WordList, config: &RenderConfig) -> Result<Layout, GenerationError> {
    generate(words, &config.generation, config.rng())
}
