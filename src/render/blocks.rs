//! Display blocks for the presentation layer.

use crate::model::{TitleRule, VirtualPage};
use serde::{Deserialize, Serialize};

/// One visual element of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum DisplayBlock {
    /// Text to show as a heading
    Heading(String),
    /// Text to show as a body paragraph
    Paragraph(String),
}

impl DisplayBlock {
    /// The block's text.
    pub fn text(&self) -> &str {
        match self {
            DisplayBlock::Heading(text) | DisplayBlock::Paragraph(text) => text,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, DisplayBlock::Heading(_))
    }
}

/// Classify a page's content into display blocks.
///
/// Classification runs on trimmed text, the same way paragraphs are
/// classified during pagination, so chunks of split paragraphs are treated
/// consistently.
pub fn page_blocks(page: &VirtualPage, rule: &TitleRule) -> Vec<DisplayBlock> {
    page.content
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(|text| {
            if rule.is_title(text) {
                DisplayBlock::Heading(text.to_string())
            } else {
                DisplayBlock::Paragraph(text.to_string())
            }
        })
        .collect()
}
