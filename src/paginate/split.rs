//! Splitting of paragraphs longer than one page.

use crate::model::{Paragraph, VirtualPage};
use log::trace;

/// Split an oversize paragraph into chunk pages of at most `capacity` characters.
///
/// Each cut prefers the last sentence boundary (`". "`) beyond
/// `min_ratio * capacity`, then the last word boundary beyond that mark, then
/// the hard limit. Chunk offsets are tight: `start` is the chunk's first
/// non-whitespace character and `end` is `start` plus the trimmed length.
pub(crate) fn split_paragraph(
    paragraph: &Paragraph,
    capacity: usize,
    min_ratio: f32,
) -> Vec<VirtualPage> {
    let chars: Vec<char> = paragraph.text.chars().collect();
    let min_break = capacity as f32 * min_ratio;
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        if pos >= chars.len() {
            break;
        }

        let remaining = chars.len() - pos;
        let take = if remaining <= capacity {
            remaining
        } else {
            find_break(&chars[pos..pos + capacity], min_break)
        };

        let raw = &chars[pos..pos + take];
        let trimmed_len = raw.len() - raw.iter().rev().take_while(|c| c.is_whitespace()).count();
        let start = paragraph.start + pos;
        let text: String = raw[..trimmed_len].iter().collect();
        trace!(
            "chunk at {} ({} chars) of paragraph at {}",
            start,
            trimmed_len,
            paragraph.start
        );
        chunks.push(VirtualPage::chunk(text, start, start + trimmed_len));

        pos += take;
    }

    chunks
}

/// Length of the next chunk within a full-capacity window.
fn find_break(window: &[char], min_break: f32) -> usize {
    let sentence = window
        .windows(2)
        .rposition(|pair| pair[0] == '.' && pair[1] == ' ');
    if let Some(index) = sentence {
        if index as f32 > min_break {
            // Keep the period with the sentence it ends
            return index + 1;
        }
    }

    let word = window.iter().rposition(|c| *c == ' ');
    if let Some(index) = word {
        if index as f32 > min_break {
            return index;
        }
    }

    window.len()
}
