//! Data model for reflow pagination.
//!
//! These types carry text from extraction through pagination to the
//! presentation and persistence layers. Offsets everywhere are character
//! offsets into a [`LogicalText`].

mod anchor;
mod budget;
mod page;
mod paragraph;
mod text;

pub use anchor::{Anchor, Bookmark, ReadingProgress};
pub use budget::{LayoutBudget, LayoutMetrics};
pub use page::{PageList, PaginationStats, VirtualPage};
pub use paragraph::{Paragraph, ParagraphKind, TitleRule};
pub use text::{collapse_whitespace, BlockSpan, LogicalText, RawTextBlock};
