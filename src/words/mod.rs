//! Word list input
//!
//! Turns raw text into normalized words of tiles: letters are upper-cased,
//! interior whitespace becomes a single blank tile, anything else is rejected
//! with a source span.

pub mod list;
pub mod samples;

pub use list::{parse_word_list, Tile, Word, WordList};
