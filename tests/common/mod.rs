//! Shared fixtures for integration tests.

#![allow(dead_code)]

use repage::{aggregate, LogicalText};

/// A small book: chapter titles, short and medium paragraphs, and a few
/// paragraphs far longer than any reasonable page.
pub fn sample_pages() -> Vec<String> {
    let mut pages = Vec::new();
    for chapter in 1..=4 {
        pages.push(format!("CHAPTER {}", ordinal(chapter)));
        for paragraph in 1..=5 {
            let sentence = format!(
                "Sentence {} of paragraph {} in chapter {} moves the story along. ",
                paragraph, paragraph, chapter
            );
            let repeat = 1 + (chapter * paragraph) % 6;
            pages.push(sentence.repeat(repeat));
        }
        pages.push(
            "A very long passage continues without pause through the night and the day. "
                .repeat(30 + chapter * 5),
        );
    }
    pages
}

/// The sample book aggregated with default options.
pub fn sample_text() -> LogicalText {
    let blocks = repage::aggregate::blocks_from_pages(sample_pages());
    aggregate(&blocks)
}

// Spelled out so every title outlives the short-block filter
fn ordinal(n: usize) -> &'static str {
    ["ONE", "TWO", "THREE", "FOUR"][n - 1]
}
