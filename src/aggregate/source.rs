//! Loading raw text blocks from files.

use crate::error::Result;
use crate::model::RawTextBlock;
use log::debug;
use std::fs;
use std::path::Path;

/// Page separator used by common PDF text extractors.
pub const FORM_FEED: char = '\x0C';

/// Number raw page strings from 1 in order.
pub fn blocks_from_pages<I, S>(pages: I) -> Vec<RawTextBlock>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    pages
        .into_iter()
        .zip(1u32..)
        .map(|(text, page)| RawTextBlock::new(page, text))
        .collect()
}

/// Parse blocks from a JSON array of strings.
pub fn blocks_from_json(json: &str) -> Result<Vec<RawTextBlock>> {
    let pages: Vec<String> = serde_json::from_str(json)?;
    Ok(blocks_from_pages(pages))
}

/// Split plain text into blocks on form feed characters.
pub fn blocks_from_text(text: &str) -> Vec<RawTextBlock> {
    blocks_from_pages(text.split(FORM_FEED))
}

/// Read raw blocks from a file.
///
/// A `.json` file holds an array of page strings; any other file is plain
/// text with pages separated by form feeds.
pub fn read_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<RawTextBlock>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let blocks = if is_json {
        blocks_from_json(&content)?
    } else {
        blocks_from_text(&content)
    };

    debug!("read {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}
