//! Rendering options and configuration.

use crate::model::TitleRule;
use std::ops::RangeInclusive;

/// Options for rendering virtual pages as plain text.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Print a header line before each page
    pub include_page_headers: bool,

    /// Show each page's offset range and source pages in its header
    pub include_offsets: bool,

    /// Text placed between pages
    pub page_separator: String,

    /// Prefix for lines classified as titles
    pub heading_prefix: String,

    /// Title classification used when rendering page content
    pub title_rule: TitleRule,

    /// Page selection
    pub page_selection: PageSelection,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page headers.
    pub fn with_page_headers(mut self, include: bool) -> Self {
        self.include_page_headers = include;
        self
    }

    /// Enable or disable offsets in page headers.
    pub fn with_offsets(mut self, include: bool) -> Self {
        self.include_offsets = include;
        self
    }

    /// Set the page separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Set the heading prefix.
    pub fn with_heading_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.heading_prefix = prefix.into();
        self
    }

    /// Set the title rule.
    pub fn with_title_rule(mut self, rule: TitleRule) -> Self {
        self.title_rule = rule;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            include_page_headers: true,
            include_offsets: false,
            page_separator: "\n\n".to_string(),
            heading_prefix: "# ".to_string(),
            title_rule: TitleRule::default(),
            page_selection: PageSelection::All,
        }
    }
}

/// Page selection for rendering.
#[derive(Debug, Clone, Default)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<usize>),
    /// Render specific pages (1-indexed)
    Pages(Vec<usize>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: usize) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: usize = start.trim().parse().map_err(|_| "Invalid start page")?;
                let end: usize = end.trim().parse().map_err(|_| "Invalid end page")?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: usize = start.trim().parse().map_err(|_| "Invalid page number")?;
                let end: usize = end.trim().parse().map_err(|_| "Invalid page number")?;
                pages.extend(start..=end);
            } else {
                let p: usize = part.parse().map_err(|_| "Invalid page number")?;
                pages.push(p);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}
