//! Virtual page types.

use super::{collapse_whitespace, LayoutBudget};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One screen-filling unit of pagination output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualPage {
    /// Page index (0-based)
    pub index: usize,

    /// Paragraph texts, or a single chunk of a split paragraph
    pub content: Vec<String>,

    /// First character offset covered by the page
    pub start: usize,

    /// Exclusive end character offset
    pub end: usize,

    /// Whether the page holds a chunk of an oversize paragraph
    pub split: bool,

    /// Native source pages the page's range overlaps
    #[serde(default)]
    pub source_pages: Option<RangeInclusive<u32>>,
}

impl VirtualPage {
    /// Create a page of whole paragraphs.
    pub fn new(content: Vec<String>, start: usize, end: usize) -> Self {
        Self {
            index: 0,
            content,
            start,
            end,
            split: false,
            source_pages: None,
        }
    }

    /// Create a page holding one chunk of a split paragraph.
    pub fn chunk(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            index: 0,
            content: vec![text.into()],
            start,
            end,
            split: true,
            source_pages: None,
        }
    }

    /// Page number (1-indexed).
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Content joined with paragraph breaks.
    pub fn plain_text(&self) -> String {
        self.content.join("\n\n")
    }

    /// Content joined and whitespace-collapsed into one line.
    pub fn normalized_text(&self) -> String {
        collapse_whitespace(&self.content.join(" "))
    }

    /// Number of characters of content.
    pub fn char_count(&self) -> usize {
        self.content.iter().map(|c| c.chars().count()).sum()
    }

    /// Source page label such as `p. 3` or `pp. 3-5`.
    pub fn source_label(&self) -> Option<String> {
        self.source_pages.as_ref().map(|pages| {
            if pages.start() == pages.end() {
                format!("p. {}", pages.start())
            } else {
                format!("pp. {}-{}", pages.start(), pages.end())
            }
        })
    }

    /// Check if the offset lies in `[start, end]`.
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Distance from the offset to the page's range (0 when contained).
    pub fn distance_to(&self, offset: usize) -> usize {
        if offset < self.start {
            self.start - offset
        } else {
            offset.saturating_sub(self.end)
        }
    }
}

/// Statistics collected during one pagination run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationStats {
    /// Paragraphs found in the logical text
    pub paragraph_count: usize,

    /// Paragraphs classified as titles
    pub title_count: usize,

    /// Paragraphs too long for one page
    pub split_paragraph_count: usize,

    /// Pages produced from split paragraphs
    pub chunk_page_count: usize,

    /// Degenerate pages removed from the output
    pub dropped_page_count: usize,

    /// Pages in the final list
    pub page_count: usize,

    /// Character length of the logical text
    pub char_count: usize,
}

/// The authoritative page list of one pagination run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    /// Pages in document order, indexed 0..N-1
    pub pages: Vec<VirtualPage>,

    /// Budget that produced the pages
    pub budget: LayoutBudget,

    /// Run statistics
    pub stats: PaginationStats,
}

impl PageList {
    /// Create a page list.
    pub fn new(pages: Vec<VirtualPage>, budget: LayoutBudget, stats: PaginationStats) -> Self {
        Self {
            pages,
            budget,
            stats,
        }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if there is no content to show.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by index (0-based).
    pub fn get(&self, index: usize) -> Option<&VirtualPage> {
        self.pages.get(index)
    }

    /// Get a page by number (1-indexed).
    pub fn page(&self, number: usize) -> Option<&VirtualPage> {
        number.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    /// Iterate over pages.
    pub fn iter(&self) -> std::slice::Iter<'_, VirtualPage> {
        self.pages.iter()
    }

    /// Clamp an externally held page number into `[1, N]`.
    ///
    /// Returns `None` when there are no pages.
    pub fn clamp_page_number(&self, number: usize) -> Option<usize> {
        crate::paginate::clamp_page_number(number, self.pages.len())
    }
}

impl AsRef<[VirtualPage]> for PageList {
    fn as_ref(&self) -> &[VirtualPage] {
        &self.pages
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a VirtualPage;
    type IntoIter = std::slice::Iter<'a, VirtualPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> PageList {
        let mut first = VirtualPage::new(vec!["Alpha".into(), "Beta".into()], 0, 12);
        first.index = 0;
        let mut second = VirtualPage::chunk("Gamma delta", 13, 24);
        second.index = 1;
        PageList::new(
            vec![first, second],
            LayoutBudget::default(),
            PaginationStats::default(),
        )
    }

    #[test]
    fn test_page_text() {
        let page = VirtualPage::new(vec!["One  two".into(), "three".into()], 0, 20);
        assert_eq!(page.plain_text(), "One  two\n\nthree");
        assert_eq!(page.normalized_text(), "One two three");
        assert_eq!(page.char_count(), 13);
        assert!(!page.split);
    }

    #[test]
    fn test_source_label() {
        let mut page = VirtualPage::new(vec!["x".into()], 0, 10);
        assert_eq!(page.source_label(), None);
        page.source_pages = Some(3..=3);
        assert_eq!(page.source_label().as_deref(), Some("p. 3"));
        page.source_pages = Some(3..=5);
        assert_eq!(page.source_label().as_deref(), Some("pp. 3-5"));
    }

    #[test]
    fn test_distance_to() {
        let page = VirtualPage::new(vec!["x".into()], 100, 200);
        assert_eq!(page.distance_to(50), 50);
        assert_eq!(page.distance_to(100), 0);
        assert_eq!(page.distance_to(200), 0);
        assert_eq!(page.distance_to(260), 60);
        assert!(page.contains_offset(200));
        assert!(!page.contains_offset(201));
    }

    #[test]
    fn test_page_list_lookup() {
        let list = sample_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list.page(1).map(|p| p.start), Some(0));
        assert_eq!(list.page(2).map(|p| p.number()), Some(2));
        assert!(list.page(0).is_none());
        assert!(list.page(3).is_none());
    }

    #[test]
    fn test_clamp_page_number() {
        let list = sample_list();
        assert_eq!(list.clamp_page_number(0), Some(1));
        assert_eq!(list.clamp_page_number(2), Some(2));
        assert_eq!(list.clamp_page_number(40), Some(2));

        let empty = PageList::new(Vec::new(), LayoutBudget::default(), Default::default());
        assert_eq!(empty.clamp_page_number(3), None);
    }
}
