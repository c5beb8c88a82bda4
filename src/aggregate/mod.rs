//! Text aggregation: per-source-page blocks into one [`LogicalText`].
//!
//! Each block is cleaned, blocks that end up too short to be meaningful are
//! dropped without contributing offsets, and the survivors are joined with
//! the paragraph delimiter.

mod cleanup;
mod source;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use source::{blocks_from_json, blocks_from_pages, blocks_from_text, read_blocks, FORM_FEED};

use crate::model::{LogicalText, RawTextBlock};
use log::{debug, trace};

/// Options for aggregating blocks.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Cleanup applied to each block
    pub cleanup: CleanupOptions,

    /// Blocks with this many characters or fewer after cleanup are dropped
    pub min_block_chars: usize,
}

impl AggregateOptions {
    /// Create new aggregate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Set cleanup preset, keeping the paragraph break setting.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        let preserve = self.cleanup.preserve_paragraph_breaks;
        self.cleanup = CleanupOptions::from_preset(preset);
        self.cleanup.preserve_paragraph_breaks = preserve;
        self
    }

    /// Keep blank-line paragraph breaks inside blocks.
    pub fn with_paragraph_breaks(mut self, preserve: bool) -> Self {
        self.cleanup.preserve_paragraph_breaks = preserve;
        self
    }

    /// Set the drop threshold for short blocks.
    pub fn with_min_block_chars(mut self, chars: usize) -> Self {
        self.min_block_chars = chars;
        self
    }
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            cleanup: CleanupOptions::default(),
            min_block_chars: 10,
        }
    }
}

/// Builds a [`LogicalText`] from raw blocks.
pub struct Aggregator {
    pipeline: CleanupPipeline,
    min_block_chars: usize,
}

impl Aggregator {
    /// Create an aggregator.
    pub fn new(options: AggregateOptions) -> Self {
        Self {
            pipeline: CleanupPipeline::new(options.cleanup),
            min_block_chars: options.min_block_chars,
        }
    }

    /// Aggregate blocks in order.
    ///
    /// An input where every block is dropped yields an empty text, which
    /// paginates to zero pages.
    pub fn aggregate(&self, blocks: &[RawTextBlock]) -> LogicalText {
        let mut text = LogicalText::new();
        let mut dropped = 0;

        for block in blocks {
            let cleaned = self.pipeline.process(&block.text);
            if cleaned.chars().count() <= self.min_block_chars {
                trace!("dropping near-empty block from page {}", block.page);
                dropped += 1;
                continue;
            }
            text.push_block(block.page, &cleaned);
        }

        debug!(
            "aggregated {} of {} blocks ({} dropped), {} chars",
            text.block_count(),
            blocks.len(),
            dropped,
            text.len()
        );
        text
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(AggregateOptions::default())
    }
}

/// Aggregate blocks with default options.
pub fn aggregate(blocks: &[RawTextBlock]) -> LogicalText {
    Aggregator::default().aggregate(blocks)
}
