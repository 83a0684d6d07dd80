//! Words, tiles, and word list parsing

use std::fmt;

use crate::error::InputError;

/// A single board tile: an upper-case letter or a blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter(char),
    Blank,
}

impl Tile {
    /// Convert a character into a tile. Spaces become blanks, ASCII letters are upper-cased.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Tile::Blank),
            c if c.is_ascii_alphabetic() => Some(Tile::Letter(c.to_ascii_uppercase())),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Letter(c) => *c,
            Tile::Blank => ' ',
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Tile::Letter(c) => Some(*c),
            Tile::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }

    /// Whether two tiles may share one cell. Blanks never match, not even other blanks.
    pub fn matches(&self, other: &Tile) -> bool {
        matches!((self, other), (Tile::Letter(a), Tile::Letter(b)) if a == b)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A normalized word ready for placement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    tiles: Vec<Tile>,
}

impl Word {
    /// Normalize a raw string into a word, reporting the first problem found
    pub fn new(raw: &str) -> Result<Self, InputError> {
        normalize(raw).map_err(|mut errors| errors.remove(0))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles, blanks included
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Normalize one entry. Spans in the returned errors are relative to `raw`.
fn normalize(raw: &str) -> Result<Word, Vec<InputError>> {
    let mut errors = Vec::new();
    let mut tiles = Vec::new();
    let mut pending_blank = false;

    for (i, c) in raw.char_indices() {
        if c.is_whitespace() {
            pending_blank = !tiles.is_empty();
            continue;
        }
        match Tile::from_char(c) {
            Some(tile) => {
                if pending_blank {
                    tiles.push(Tile::Blank);
                    pending_blank = false;
                }
                tiles.push(tile);
            }
            None => errors.push(InputError::invalid_character(c, i..i + c.len_utf8())),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if tiles.is_empty() {
        return Err(vec![InputError::empty_word(0..raw.len())]);
    }

    let text = tiles.iter().map(Tile::as_char).collect();
    Ok(Word { text, tiles })
}

/// An ordered list of words. The first word seeds the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from in-memory strings, collecting every error
    pub fn from_words<I, S>(words: I) -> Result<Self, Vec<InputError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut errors = Vec::new();
        for raw in words {
            match normalize(raw.as_ref()) {
                Ok(word) => list.push(word),
                Err(errs) => errors.extend(errs),
            }
        }
        if errors.is_empty() {
            Ok(Self { words: list })
        } else {
            Err(errors)
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of tiles across all words
    pub fn total_tiles(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Parse a word list: one word per line, or several separated by commas.
///
/// Blank lines, empty entries, and lines starting with `#` are skipped.
/// Every invalid character in the source is reported, not only the first.
pub fn parse_word_list(source: &str) -> Result<WordList, Vec<InputError>> {
    let mut words = Vec::new();
    let mut errors = Vec::new();
    let mut line_start = 0;

    for line in source.split_inclusive('\n') {
        let offset = line_start;
        line_start += line.len();

        if line.trim_start().starts_with('#') {
            continue;
        }

        let mut entry_start = offset;
        for entry in line.split(',') {
            let entry_offset = entry_start;
            entry_start += entry.len() + 1;

            if entry.trim().is_empty() {
                continue;
            }
            match normalize(entry) {
                Ok(word) => words.push(word),
                Err(errs) => errors.extend(errs.into_iter().map(|e| e.offset(entry_offset))),
            }
        }
    }

    if errors.is_empty() {
        Ok(WordList { words })
    } else {
        Err(errors)
    }
}
