//! Built-in word lists

use super::WordList;

/// Default list used when no words are supplied
pub const DEFAULT_WORDS: &[&str] = &[
    "FAMILY", "LOVE", "HOME", "TIME", "MAKE", "NAME", "GAME", "TEAM", "LIFE", "MATE",
];

/// Named sample lists that lay out well
pub const SAMPLES: &[(&str, &[&str])] = &[
    ("simple", &["CAT", "BAT", "HAT", "RAT", "TAR", "ART", "CAR"]),
    ("names", &["ANNA", "ALAN", "LANA", "NANA", "ANN", "NAN"]),
    (
        "family",
        &[
            "FAMILY", "LOVE", "HOME", "TIME", "LIFE", "TEAM", "GAME", "NAME", "MAKE", "MEAL",
        ],
    ),
    (
        "spaces",
        &[
            "TEAM WORK",
            "HOME RUN",
            "NEW YEAR",
            "TIME OUT",
            "WORK TEAM",
            "RUN HOME",
            "YEAR END",
        ],
    ),
];

pub fn default_words() -> WordList {
    WordList::from_words(DEFAULT_WORDS).unwrap_or_default()
}

/// Look up a sample list by name
pub fn sample(name: &str) -> Option<WordList> {
    SAMPLES
        .iter()
        .find(|(sample_name, _)| *sample_name == name)
        .and_then(|(_, words)| WordList::from_words(words.iter()).ok())
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(name, _)| *name)
}
