//! Renderers for board layouts
//!
//! This module takes a `Layout` and produces an SVG document with CSS classes
//! for styling, or a plain-text grid for terminals.

pub mod config;
pub mod svg;
pub mod text;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet, to_data_uri};
pub use text::render_text;
