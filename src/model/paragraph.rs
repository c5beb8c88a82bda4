//! Paragraph types and title classification.

use serde::{Deserialize, Serialize};

/// A delimiter-bounded run of non-blank text in a [`LogicalText`](super::LogicalText).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Trimmed paragraph text
    pub text: String,

    /// Character offset of the trimmed text in the logical text
    pub start: usize,

    /// Length of `text` in characters
    pub len: usize,

    /// Title or body classification
    pub kind: ParagraphKind,
}

impl Paragraph {
    /// Create a paragraph, classifying it with the given rule.
    pub fn new(text: impl Into<String>, start: usize, rule: &TitleRule) -> Self {
        let text = text.into();
        let len = text.chars().count();
        let kind = rule.classify(&text);
        Self {
            text,
            start,
            len,
            kind,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this paragraph is a title.
    pub fn is_title(&self) -> bool {
        self.kind == ParagraphKind::Title
    }
}

/// Paragraph classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    /// Short, mostly-uppercase heading text
    Title,
    /// Regular body text
    #[default]
    Body,
}

/// Rule deciding whether a paragraph is a title.
///
/// Text is a title when it is shorter than `max_chars` and more than
/// `uppercase_ratio` of its letters are uppercase. The rule always looks at
/// trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleRule {
    /// Titles must be strictly shorter than this many characters
    pub max_chars: usize,

    /// Fraction of letters that must be uppercase (exclusive)
    pub uppercase_ratio: f32,
}

impl TitleRule {
    /// Check if text qualifies as a title.
    pub fn is_title(&self, text: &str) -> bool {
        let text = text.trim();
        if text.chars().count() >= self.max_chars {
            return false;
        }

        let (letters, upper) = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .fold((0usize, 0usize), |(letters, upper), c| {
                (letters + 1, upper + usize::from(c.is_uppercase()))
            });
        if letters == 0 {
            return false;
        }

        upper as f32 / letters as f32 > self.uppercase_ratio
    }

    /// Classify text as title or body.
    pub fn classify(&self, text: &str) -> ParagraphKind {
        if self.is_title(text) {
            ParagraphKind::Title
        } else {
            ParagraphKind::Body
        }
    }
}

impl Default for TitleRule {
    fn default() -> Self {
        Self {
            max_chars: 100,
            uppercase_ratio: 0.7,
        }
    }
}
