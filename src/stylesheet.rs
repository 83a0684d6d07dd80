//! Stylesheet system for tile colours
//!
//! Colours are referenced from the SVG through CSS custom properties, so a
//! board can be re-themed by swapping the stylesheet without touching the
//! layout.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping colour tokens to concrete values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colour mappings: token name -> colour, ordered so output is stable
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - classic wooden tiles on a white board
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "classic"

[colors]
# Board behind the tiles
board = "#ffffff"

# Tile faces
tile-fill = "#f3d9a4"
tile-stroke = "#b88a4a"
tile-blank = "#ede3cc"

# Letters and point values
letter = "#2b2b2b"
points = "#5a4630"

font-family = "Georgia, 'Times New Roman', serif"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a colour token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Stylesheet with every missing default token filled in
    pub fn merged_with_defaults(&self) -> Stylesheet {
        let mut colors = Self::default().colors;
        colors.extend(self.colors.clone());
        Stylesheet {
            name: self.name.clone(),
            description: self.description.clone(),
            colors,
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
