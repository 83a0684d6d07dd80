//! Per-letter point values shown on rendered tiles
//!
//! Points are a display annotation only; placement never looks at them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::words::{Tile, Word};

/// Errors that can occur when loading a points table
#[derive(Error, Debug)]
pub enum PointsError {
    #[error("Failed to read points file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse points TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid points key '{0}': keys must be a single letter A-Z")]
    InvalidKey(String),
}

/// Mapping from letter to point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPoints {
    values: BTreeMap<char, u32>,
}

#[derive(Deserialize)]
struct TomlPoints {
    points: BTreeMap<String, u32>,
}

const STANDARD: &[(&str, u32)] = &[
    ("AEILNORSTU", 1),
    ("DG", 2),
    ("BCMP", 3),
    ("FHVWY", 4),
    ("K", 5),
    ("JX", 8),
    ("QZ", 10),
];

impl LetterPoints {
    /// English Scrabble tile values
    pub fn standard() -> Self {
        let values = STANDARD
            .iter()
            .flat_map(|(letters, value)| letters.chars().map(move |c| (c, *value)))
            .collect();
        Self { values }
    }

    /// A table with no values; every tile renders without points
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Load overrides from a TOML file on top of the standard values
    pub fn from_file(path: &Path) -> Result<Self, PointsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load overrides from a TOML string on top of the standard values
    ///
    /// ```toml
    /// [points]
    /// Q = 12
    /// e = 2
    /// ```
    pub fn from_str(content: &str) -> Result<Self, PointsError> {
        let parsed: TomlPoints = toml::from_str(content)?;
        let mut table = Self::standard();
        for (key, value) in parsed.points {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    table.values.insert(c.to_ascii_uppercase(), value);
                }
                _ => return Err(PointsError::InvalidKey(key)),
            }
        }
        Ok(table)
    }

    /// Point value of a tile, or None for blanks and unlisted letters
    pub fn points(&self, tile: Tile) -> Option<u32> {
        tile.letter().and_then(|c| self.values.get(&c).copied())
    }

    /// Sum of the tile values in a word
    pub fn word_score(&self, word: &Word) -> u32 {
        word.tiles().iter().filter_map(|t| self.points(*t)).sum()
    }
}

impl Default for LetterPoints {
    fn default() -> Self {
        Self::standard()
    }
}
