//! Reader session: one open document with its reflow state.
//!
//! A [`ReaderSession`] is an explicit value owned by the caller. It holds the
//! document's [`LogicalText`], the page list for the current budget and the
//! current page. Navigation reports a [`ReadingProgress`] value for the
//! persistence layer instead of writing anywhere itself.

use crate::aggregate::Aggregator;
use crate::error::{Error, Result};
use crate::locate::{LocateOptions, Locator};
use crate::model::{
    Anchor, Bookmark, LayoutBudget, LogicalText, PageList, RawTextBlock, ReadingProgress,
    VirtualPage,
};
use crate::paginate::{PaginateOptions, Paginator};
use log::{debug, info};

/// Result of moving to a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Page before the move (1-indexed)
    pub previous: Option<usize>,

    /// Page after the move (1-indexed)
    pub page: usize,

    /// Position to persist, best-effort
    pub progress: ReadingProgress,
}

/// Result of re-paginating under a new budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Relayout {
    /// Page count before the change
    pub previous_page_count: usize,

    /// Page count after the change
    pub page_count: usize,

    /// Current page after the change (1-indexed), `None` without content
    pub page: Option<usize>,

    /// Whether the reading position was carried over by offset
    pub anchored: bool,

    /// Position to persist, `None` without content
    pub progress: Option<ReadingProgress>,
}

/// One open document with its reflow state.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    text: LogicalText,
    paginator: Paginator,
    locator: Locator,
    pages: PageList,
    current: Option<usize>,
}

impl ReaderSession {
    /// Open a session over aggregated text.
    pub fn new(text: LogicalText, budget: LayoutBudget) -> Result<Self> {
        Self::with_options(
            text,
            budget,
            PaginateOptions::default(),
            LocateOptions::default(),
        )
    }

    /// Open a session with custom engine options.
    pub fn with_options(
        text: LogicalText,
        budget: LayoutBudget,
        paginate_options: PaginateOptions,
        locate_options: LocateOptions,
    ) -> Result<Self> {
        let paginator = Paginator::new(paginate_options);
        let pages = paginator.paginate(&text, budget)?;
        let current = pages.clamp_page_number(1);
        info!(
            "opened session: {} chars, {} pages at {} chars/page",
            text.len(),
            pages.len(),
            pages.budget.chars_per_page()
        );
        Ok(Self {
            text,
            paginator,
            locator: Locator::new(locate_options),
            pages,
            current,
        })
    }

    /// Aggregate raw blocks with default options and open a session.
    pub fn from_blocks(blocks: &[RawTextBlock], budget: LayoutBudget) -> Result<Self> {
        Self::new(Aggregator::default().aggregate(blocks), budget)
    }

    /// The document text.
    pub fn text(&self) -> &LogicalText {
        &self.text
    }

    /// The current page list.
    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    /// Number of pages in the current layout.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Budget of the current layout.
    pub fn budget(&self) -> LayoutBudget {
        self.pages.budget
    }

    /// Check if the document has no content to show.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Current page number (1-indexed).
    pub fn current_page_number(&self) -> Option<usize> {
        self.current
    }

    /// Current page.
    pub fn current_page(&self) -> Option<&VirtualPage> {
        self.current.and_then(|number| self.pages.page(number))
    }

    /// Re-paginate under a new budget.
    ///
    /// The reader stays on the page holding the start of the previously
    /// shown page. On error the previous layout is kept untouched.
    pub fn relayout(&mut self, budget: LayoutBudget) -> Result<Relayout> {
        let pages = self.paginator.paginate(&self.text, budget)?;
        let previous_page_count = self.pages.len();
        let anchor = self.current_page().map(|page| page.start);

        let located = anchor
            .and_then(|offset| self.locator.locate_offset(&pages.pages, offset))
            .map(|index| index + 1);
        let anchored = located.is_some();
        let page = located.or_else(|| {
            self.current
                .and_then(|number| pages.clamp_page_number(number))
                .or_else(|| pages.clamp_page_number(1))
        });

        self.pages = pages;
        self.current = page;

        debug!(
            "relayout to {} chars/page: {} -> {} pages, now on {:?}",
            self.pages.budget.chars_per_page(),
            previous_page_count,
            self.pages.len(),
            page
        );

        Ok(Relayout {
            previous_page_count,
            page_count: self.pages.len(),
            page,
            anchored,
            progress: self.progress(),
        })
    }

    /// Move to a page number (1-indexed).
    pub fn go_to(&mut self, number: usize) -> Result<Navigation> {
        if number == 0 || number > self.pages.len() {
            return Err(Error::PageOutOfRange(number, self.pages.len()));
        }
        Ok(self.move_to(number))
    }

    /// Move to the next page, `None` at the end.
    pub fn next_page(&mut self) -> Option<Navigation> {
        let next = self.current? + 1;
        (next <= self.pages.len()).then(|| self.move_to(next))
    }

    /// Move to the previous page, `None` at the start.
    pub fn previous_page(&mut self) -> Option<Navigation> {
        let previous = self.current?.checked_sub(1).filter(|n| *n >= 1)?;
        Some(self.move_to(previous))
    }

    /// Resolve an anchor to a page index (0-based).
    pub fn resolve(&self, anchor: &Anchor) -> Option<usize> {
        self.locator.locate(&self.pages.pages, anchor)
    }

    /// Resolve a bookmark to a page index (0-based).
    pub fn resolve_bookmark(&self, bookmark: &Bookmark) -> Option<usize> {
        self.locator.locate_bookmark(&self.pages.pages, bookmark)
    }

    /// Move to the page an anchor points at.
    pub fn open_anchor(&mut self, anchor: &Anchor) -> Option<Navigation> {
        let index = self.resolve(anchor)?;
        Some(self.move_to(index + 1))
    }

    /// Move to the page a bookmark points at.
    pub fn open_bookmark(&mut self, bookmark: &Bookmark) -> Option<Navigation> {
        let index = self.resolve_bookmark(bookmark)?;
        Some(self.move_to(index + 1))
    }

    /// Reopen at a stored position.
    ///
    /// The stored offset is preferred; when it cannot be placed the stored
    /// fraction picks the page instead.
    pub fn restore(&mut self, progress: &ReadingProgress) -> Option<Navigation> {
        if let Some(index) = self
            .locator
            .locate_offset(&self.pages.pages, progress.offset)
        {
            return Some(self.move_to(index + 1));
        }

        let count = self.pages.len();
        let by_fraction = (progress.fraction.clamp(0.0, 1.0) * count as f32).ceil() as usize;
        let number = self.pages.clamp_page_number(by_fraction)?;
        Some(self.move_to(number))
    }

    /// Bookmark the current page.
    pub fn bookmark_current(&self, id: impl Into<String>, note: Option<String>) -> Option<Bookmark> {
        let page = self.current_page()?;
        let mut bookmark = self.locator.capture(id, page);
        bookmark.note = note;
        Some(bookmark)
    }

    /// Progress at the current page.
    pub fn progress(&self) -> Option<ReadingProgress> {
        self.current_page()
            .map(|page| ReadingProgress::new(page, self.pages.len(), self.text.len()))
    }

    fn move_to(&mut self, number: usize) -> Navigation {
        let previous = self.current.replace(number);
        let page = &self.pages.pages[number - 1];
        Navigation {
            previous,
            page: number,
            progress: ReadingProgress::new(page, self.pages.len(), self.text.len()),
        }
    }
}
