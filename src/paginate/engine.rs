//! The reflow pagination engine.

use super::split::split_paragraph;
use super::PaginateOptions;
use crate::error::Result;
use crate::model::{
    collapse_whitespace, LayoutBudget, LogicalText, PageList, PaginationStats, Paragraph,
    VirtualPage,
};
use log::{debug, trace};

/// Partitions a [`LogicalText`] into virtual pages.
///
/// Pagination is a pure function of the text, the budget and the options:
/// the same inputs always produce the same page list.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    options: PaginateOptions,
}

impl Paginator {
    /// Create a paginator.
    pub fn new(options: PaginateOptions) -> Self {
        Self { options }
    }

    /// Get the pagination options.
    pub fn options(&self) -> &PaginateOptions {
        &self.options
    }

    /// Paginate the text under a budget.
    ///
    /// Returns [`Error::InvalidBudget`](crate::Error::InvalidBudget) before
    /// producing any output when the budget cannot drive a run. Text without
    /// paragraphs yields an empty page list.
    pub fn paginate(&self, text: &LogicalText, budget: LayoutBudget) -> Result<PageList> {
        let budget = budget.validated()?;
        let capacity = budget.chars_per_page();

        let paragraphs = text.paragraphs(&self.options.title_rule);
        let mut stats = PaginationStats {
            paragraph_count: paragraphs.len(),
            char_count: text.len(),
            ..Default::default()
        };

        let mut pages = Vec::new();
        let mut current = PageBuilder::new(self.options.paragraph_spacing_cost);

        for paragraph in &paragraphs {
            if paragraph.is_title() {
                stats.title_count += 1;
                if !current.is_empty() {
                    pages.push(current.flush(paragraph.start.saturating_sub(1)));
                }
                current.push(paragraph);
                continue;
            }

            if !current.is_empty() && current.cost() + paragraph.len > capacity {
                pages.push(current.flush(paragraph.start.saturating_sub(1)));
            }

            if paragraph.len > capacity {
                // Overflow above already flushed anything pending
                let chunks = split_paragraph(paragraph, capacity, self.options.split_min_ratio);
                stats.split_paragraph_count += 1;
                stats.chunk_page_count += chunks.len();
                pages.extend(chunks);
                continue;
            }

            current.push(paragraph);
        }

        if let Some(end) = current.content_end() {
            pages.push(current.flush(end));
        }

        let produced = pages.len();
        let min_page_chars = self.options.min_page_chars;
        pages.retain(|page| {
            collapse_whitespace(&page.content.join(" ")).chars().count() > min_page_chars
        });
        stats.dropped_page_count = produced - pages.len();

        for (index, page) in pages.iter_mut().enumerate() {
            page.index = index;
            page.source_pages = text.source_pages(page.start, page.end);
        }
        stats.page_count = pages.len();

        debug!(
            "paginated {} paragraphs into {} pages at {} chars/page ({} titles, {} split, {} dropped)",
            stats.paragraph_count,
            stats.page_count,
            capacity,
            stats.title_count,
            stats.split_paragraph_count,
            stats.dropped_page_count
        );

        Ok(PageList::new(pages, budget, stats))
    }
}

/// Accumulator for the page being filled.
struct PageBuilder<'a> {
    paragraphs: Vec<&'a Paragraph>,
    cost: usize,
    start: usize,
    spacing_cost: usize,
}

impl<'a> PageBuilder<'a> {
    fn new(spacing_cost: usize) -> Self {
        Self {
            paragraphs: Vec::new(),
            cost: 0,
            start: 0,
            spacing_cost,
        }
    }

    fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    fn cost(&self) -> usize {
        self.cost
    }

    fn push(&mut self, paragraph: &'a Paragraph) {
        if self.paragraphs.is_empty() {
            self.start = paragraph.start;
        }
        self.cost += paragraph.len + self.spacing_cost;
        self.paragraphs.push(paragraph);
    }

    /// End offset of the last accumulated paragraph.
    fn content_end(&self) -> Option<usize> {
        self.paragraphs.last().map(|p| p.end())
    }

    fn flush(&mut self, end: usize) -> VirtualPage {
        let content = self.paragraphs.drain(..).map(|p| p.text.clone()).collect();
        trace!("page [{}, {}) cost {}", self.start, end, self.cost);
        self.cost = 0;
        VirtualPage::new(content, self.start, end)
    }
}
