//! Logical text types.

use super::{Paragraph, TitleRule};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One per-source-page text block as delivered by text extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTextBlock {
    /// Source page number (1-indexed)
    pub page: u32,

    /// Extracted text, possibly still carrying raw whitespace
    pub text: String,
}

impl RawTextBlock {
    /// Create a new block for a source page.
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// The character range a surviving source block occupies in a [`LogicalText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpan {
    /// Source page number (1-indexed)
    pub page: u32,

    /// First character offset of the block
    pub start: usize,

    /// Exclusive end character offset of the block
    pub end: usize,
}

/// The full extracted text of a document as one string.
///
/// Paragraph breaks are preserved as [`LogicalText::PARAGRAPH_DELIMITER`].
/// All offsets are character offsets, not byte offsets. Deserialization
/// recomputes the cached length and keeps only spans that fit the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredText")]
pub struct LogicalText {
    text: String,
    char_len: usize,
    spans: Vec<BlockSpan>,
}

impl LogicalText {
    /// Delimiter placed between paragraphs.
    pub const PARAGRAPH_DELIMITER: &'static str = "\n\n";

    /// Character length of [`LogicalText::PARAGRAPH_DELIMITER`].
    pub const DELIMITER_CHARS: usize = 2;

    /// Create an empty logical text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-joined string, treating it as a single source page.
    pub fn from_string(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        let spans = if char_len > 0 {
            vec![BlockSpan {
                page: 1,
                start: 0,
                end: char_len,
            }]
        } else {
            Vec::new()
        };
        Self {
            text,
            char_len,
            spans,
        }
    }

    /// Append a cleaned block, inserting the paragraph delimiter when needed.
    pub(crate) fn push_block(&mut self, page: u32, block: &str) {
        if !self.text.is_empty() {
            self.text.push_str(Self::PARAGRAPH_DELIMITER);
            self.char_len += Self::DELIMITER_CHARS;
        }
        let start = self.char_len;
        self.text.push_str(block);
        self.char_len += block.chars().count();
        self.spans.push(BlockSpan {
            page,
            start,
            end: self.char_len,
        });
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Spans of the source blocks that survived aggregation.
    pub fn spans(&self) -> &[BlockSpan] {
        &self.spans
    }

    /// Number of source blocks that survived aggregation.
    pub fn block_count(&self) -> usize {
        self.spans.len()
    }

    /// Source page numbers overlapping the character range `[start, end)`.
    pub fn source_pages(&self, start: usize, end: usize) -> Option<RangeInclusive<u32>> {
        let mut overlapping = self
            .spans
            .iter()
            .filter(|span| span.start < end.max(start + 1) && span.end > start);
        let first = overlapping.next()?;
        let last = overlapping.last().unwrap_or(first);
        Some(first.page..=last.page)
    }

    /// Slice the text by character range `[start, end)`, clamped to the text.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.char_len);
        if start >= end {
            return "";
        }
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        &self.text[from..to]
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Split the text into paragraphs in one forward scan.
    ///
    /// Each paragraph's `start` is the true offset of its trimmed text, so
    /// offsets never drift from summing trimmed lengths.
    pub fn paragraphs(&self, rule: &TitleRule) -> Vec<Paragraph> {
        let mut paragraphs = Vec::new();
        let mut offset = 0;

        for segment in self.text.split(Self::PARAGRAPH_DELIMITER) {
            let segment_chars = segment.chars().count();
            let trimmed = segment.trim();
            if !trimmed.is_empty() {
                let leading = segment.chars().take_while(|c| c.is_whitespace()).count();
                paragraphs.push(Paragraph::new(trimmed, offset + leading, rule));
            }
            offset += segment_chars + Self::DELIMITER_CHARS;
        }

        paragraphs
    }
}

#[derive(Deserialize)]
struct StoredText {
    text: String,
    #[serde(default)]
    spans: Vec<BlockSpan>,
}

impl From<StoredText> for LogicalText {
    fn from(stored: StoredText) -> Self {
        let char_len = stored.text.chars().count();
        let mut previous_end = 0;
        let spans: Vec<BlockSpan> = stored
            .spans
            .into_iter()
            .filter(|span| {
                let fits =
                    span.start >= previous_end && span.start < span.end && span.end <= char_len;
                if fits {
                    previous_end = span.end;
                }
                fits
            })
            .collect();

        if spans.is_empty() {
            return Self::from_string(stored.text);
        }
        Self {
            text: stored.text,
            char_len,
            spans,
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
