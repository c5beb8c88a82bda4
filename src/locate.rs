//! Resolving stored anchors against a freshly computed page list.
//!
//! Anchors are resolved by position in the text, never by page index, so a
//! bookmark keeps pointing at the same passage after the page count changes.

use crate::model::{collapse_whitespace, Anchor, Bookmark, VirtualPage};
use log::{debug, trace};

/// Options for anchor resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOptions {
    /// Maximum distance for accepting the nearest page when no page contains an offset
    pub tolerance: usize,

    /// Snippets shorter than this are too ambiguous to match
    pub min_snippet_chars: usize,

    /// Length of the snippet captured for new bookmarks
    pub snippet_capture_chars: usize,
}

impl LocateOptions {
    /// Create new locate options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nearest-page tolerance.
    pub fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimum snippet length.
    pub fn with_min_snippet_chars(mut self, chars: usize) -> Self {
        self.min_snippet_chars = chars;
        self
    }

    /// Set the captured snippet length.
    pub fn with_snippet_capture_chars(mut self, chars: usize) -> Self {
        self.snippet_capture_chars = chars;
        self
    }
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            tolerance: 1000,
            min_snippet_chars: 10,
            snippet_capture_chars: 100,
        }
    }
}

/// Finds the page an anchor points at.
///
/// All lookups return a 0-based page index, or `None` when the anchor cannot
/// be placed; the caller decides the fallback.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    options: LocateOptions,
}

impl Locator {
    /// Create a locator.
    pub fn new(options: LocateOptions) -> Self {
        Self { options }
    }

    /// Get the locate options.
    pub fn options(&self) -> &LocateOptions {
        &self.options
    }

    /// Resolve an anchor.
    pub fn locate(&self, pages: &[VirtualPage], anchor: &Anchor) -> Option<usize> {
        match anchor {
            Anchor::Offset(offset) => self.locate_offset(pages, *offset),
            Anchor::Snippet(snippet) => self.locate_snippet(pages, snippet),
        }
    }

    /// Find the page containing an offset.
    ///
    /// The first page whose `[start, end]` contains the offset wins. Otherwise
    /// the page whose range is nearest is accepted if it lies within the
    /// tolerance; equal distances resolve to the earlier page.
    pub fn locate_offset(&self, pages: &[VirtualPage], offset: usize) -> Option<usize> {
        for (index, page) in pages.iter().enumerate() {
            if page.start > offset {
                // Starts are increasing, nothing later can contain the offset
                break;
            }
            if page.contains_offset(offset) {
                trace!("offset {} contained in page {}", offset, index);
                return Some(index);
            }
        }

        let mut nearest: Option<(usize, usize)> = None;
        for (index, page) in pages.iter().enumerate() {
            let distance = page.distance_to(offset);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        match nearest {
            Some((index, distance)) if distance < self.options.tolerance => {
                trace!(
                    "offset {} resolved to nearest page {} at distance {}",
                    offset,
                    index,
                    distance
                );
                Some(index)
            }
            _ => {
                debug!("offset {} not found in {} pages", offset, pages.len());
                None
            }
        }
    }

    /// Find the first page whose content contains a snippet.
    ///
    /// Whitespace is normalized on both sides before comparing.
    pub fn locate_snippet(&self, pages: &[VirtualPage], snippet: &str) -> Option<usize> {
        let needle = collapse_whitespace(snippet);
        if needle.chars().count() < self.options.min_snippet_chars {
            debug!("snippet too short to locate: {:?}", needle);
            return None;
        }

        let found = pages
            .iter()
            .position(|page| page.normalized_text().contains(&needle));
        if found.is_none() {
            debug!("snippet not found in {} pages", pages.len());
        }
        found
    }

    /// Resolve a bookmark, trying its offset before its snippet.
    pub fn locate_bookmark(&self, pages: &[VirtualPage], bookmark: &Bookmark) -> Option<usize> {
        bookmark
            .anchors()
            .iter()
            .find_map(|anchor| self.locate(pages, anchor))
    }

    /// Capture a bookmark for a page.
    pub fn capture(&self, id: impl Into<String>, page: &VirtualPage) -> Bookmark {
        Bookmark::at_page(id, page, self.options.snippet_capture_chars)
    }
}

/// Resolve an anchor with default options.
pub fn locate(pages: &[VirtualPage], anchor: &Anchor) -> Option<usize> {
    Locator::default().locate(pages, anchor)
}
