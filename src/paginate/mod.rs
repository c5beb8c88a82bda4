//! Reflow pagination of a [`LogicalText`] into virtual pages.
//!
//! Rules, applied per paragraph in document order:
//!
//! 1. A title starts a new page when the current page already has content.
//! 2. A paragraph that would overflow the budget starts a new page.
//! 3. A paragraph longer than the budget is split into chunk pages, cutting
//!    at sentence or word boundaries past the middle of the budget.
//! 4. Otherwise the paragraph joins the current page.
//!
//! Pages whose content collapses to a handful of characters are dropped and
//! the rest are numbered from zero.

mod engine;
mod options;
mod split;

pub use engine::Paginator;
pub use options::PaginateOptions;

use crate::error::Result;
use crate::model::{LayoutBudget, LogicalText, PageList};

/// Paginate with default options.
pub fn paginate(text: &LogicalText, budget: LayoutBudget) -> Result<PageList> {
    Paginator::default().paginate(text, budget)
}

/// Clamp an externally held page number (1-indexed) into `[1, page_count]`.
///
/// A page number beyond a shrunken page list collapses to the last page.
/// Returns `None` when there are no pages.
pub fn clamp_page_number(number: usize, page_count: usize) -> Option<usize> {
    if page_count == 0 {
        None
    } else {
        Some(number.clamp(1, page_count))
    }
}
