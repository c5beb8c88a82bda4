//! # repage
//!
//! Reflow pagination for document readers.
//!
//! This library takes text extracted page-by-page from a document, joins it
//! into one logical text stream, and partitions that stream into screen-sized
//! virtual pages for a given layout budget. Every page records the character
//! range it covers, so bookmarks stored as offsets land on the right page
//! after the font size or viewport changes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use repage::{paginate_file, Anchor, LayoutBudget};
//!
//! fn main() -> repage::Result<()> {
//!     let pages = paginate_file("book.txt", LayoutBudget::new(1200)?)?;
//!     println!("{} pages", pages.len());
//!
//!     // Find the page holding character 5000
//!     if let Some(index) = repage::locate(&pages.pages, &Anchor::Offset(5000)) {
//!         println!("{}", pages.pages[index].plain_text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic pagination**: same text and budget, same pages
//! - **Semantic breaks**: titles start pages, long paragraphs split at sentences
//! - **Stable anchors**: offsets and snippets resolve across re-pagination
//! - **Reader sessions**: navigation with progress events for persistence
//! - **Cleanup pipeline**: Unicode normalization and ligature repair

pub mod aggregate;
pub mod error;
pub mod locate;
pub mod model;
pub mod paginate;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use aggregate::{
    aggregate, read_blocks, AggregateOptions, Aggregator, CleanupOptions, CleanupPreset,
};
pub use error::{Error, Result};
pub use locate::{locate, LocateOptions, Locator};
pub use model::{
    Anchor, BlockSpan, Bookmark, LayoutBudget, LayoutMetrics, LogicalText, PageList,
    PaginationStats, Paragraph, ParagraphKind, RawTextBlock, ReadingProgress, TitleRule,
    VirtualPage,
};
pub use paginate::{clamp_page_number, paginate, PaginateOptions, Paginator};
pub use render::{DisplayBlock, JsonFormat, PageSelection, TextOptions};
pub use session::{Navigation, ReaderSession, Relayout};

use std::path::Path;

/// Aggregate raw page strings and paginate them.
///
/// # Example
///
/// ```
/// use repage::{paginate_pages, LayoutBudget};
///
/// let pages = paginate_pages(
///     ["It was a bright cold day in April.", "CHAPTER TWO: THE CLOCKS"],
///     LayoutBudget::new(500).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(pages.len(), 2);
/// ```
pub fn paginate_pages<I, S>(pages: I, budget: LayoutBudget) -> Result<PageList>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let blocks = aggregate::blocks_from_pages(pages);
    paginate(&aggregate(&blocks), budget)
}

/// Read blocks from a file, aggregate and paginate them.
///
/// See [`read_blocks`] for the accepted file formats.
pub fn paginate_file<P: AsRef<Path>>(path: P, budget: LayoutBudget) -> Result<PageList> {
    let blocks = read_blocks(path)?;
    paginate(&aggregate(&blocks), budget)
}

/// Builder for opening reader sessions.
///
/// # Example
///
/// ```no_run
/// use repage::{CleanupPreset, LayoutMetrics, Repage};
///
/// let session = Repage::new()
///     .with_cleanup(CleanupPreset::Aggressive)
///     .with_paragraph_breaks()
///     .with_metrics(LayoutMetrics::new(1024.0, 768.0).with_font_size(18.0))
///     .open("book.json")?;
/// println!("{} pages", session.page_count());
/// # Ok::<(), repage::Error>(())
/// ```
pub struct Repage {
    aggregate_options: AggregateOptions,
    paginate_options: PaginateOptions,
    locate_options: LocateOptions,
    layout: Layout,
}

enum Layout {
    Budget(LayoutBudget),
    Metrics(LayoutMetrics),
}

impl Repage {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            aggregate_options: AggregateOptions::default(),
            paginate_options: PaginateOptions::default(),
            locate_options: LocateOptions::default(),
            layout: Layout::Budget(LayoutBudget::default()),
        }
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.aggregate_options = self.aggregate_options.with_cleanup_preset(preset);
        self
    }

    /// Keep blank-line paragraph breaks inside source pages.
    pub fn with_paragraph_breaks(mut self) -> Self {
        self.aggregate_options = self.aggregate_options.with_paragraph_breaks(true);
        self
    }

    /// Set the layout budget directly.
    pub fn with_budget(mut self, budget: LayoutBudget) -> Self {
        self.layout = Layout::Budget(budget);
        self
    }

    /// Derive the layout budget from viewport metrics.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.layout = Layout::Metrics(metrics);
        self
    }

    /// Set pagination options.
    pub fn with_paginate_options(mut self, options: PaginateOptions) -> Self {
        self.paginate_options = options;
        self
    }

    /// Set anchor resolution options.
    pub fn with_locate_options(mut self, options: LocateOptions) -> Self {
        self.locate_options = options;
        self
    }

    /// Read a block file and open a session over it.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<ReaderSession> {
        let blocks = read_blocks(path)?;
        self.session(&blocks)
    }

    /// Open a session over raw blocks.
    pub fn session(self, blocks: &[RawTextBlock]) -> Result<ReaderSession> {
        let budget = match self.layout {
            Layout::Budget(budget) => budget,
            Layout::Metrics(ref metrics) => LayoutBudget::from_metrics(metrics)?,
        };
        let text = Aggregator::new(self.aggregate_options).aggregate(blocks);
        ReaderSession::with_options(text, budget, self.paginate_options, self.locate_options)
    }
}

impl Default for Repage {
    fn default() -> Self {
        Self::new()
    }
}
