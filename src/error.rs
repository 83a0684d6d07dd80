//! Error types for reading word lists

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid character {ch:?} at {span:?}: words may only contain letters and spaces")]
    InvalidCharacter { ch: char, span: Span },

    #[error("empty word at {span:?}")]
    EmptyWord { span: Span },
}

impl InputError {
    /// Create an invalid character error
    pub fn invalid_character(ch: char, span: Span) -> Self {
        Self::InvalidCharacter { ch, span }
    }

    /// Create an empty word error
    pub fn empty_word(span: Span) -> Self {
        Self::EmptyWord { span }
    }

    /// Get the source span of the error
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidCharacter { span, .. } => span,
            Self::EmptyWord { span } => span,
        }
    }

    /// Shift the span by `offset` bytes, used when a word was parsed out of a larger source
    pub(crate) fn offset(self, offset: usize) -> Self {
        match self {
            Self::InvalidCharacter { ch, span } => Self::InvalidCharacter {
                ch,
                span: span.start + offset..span.end + offset,
            },
            Self::EmptyWord { span } => Self::EmptyWord {
                span: span.start + offset..span.end + offset,
            },
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let (message, hint) = match self {
            Self::InvalidCharacter { ch, .. } => (
                format!("Invalid character {:?}", ch),
                "only letters A-Z and single spaces can become tiles".to_string(),
            ),
            Self::EmptyWord { .. } => (
                "Empty word".to_string(),
                "remove the entry or add letters".to_string(),
            ),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(hint)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
