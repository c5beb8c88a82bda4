//! Anchors, bookmarks and reading progress.

use super::VirtualPage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored reference to a location in the logical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Anchor {
    /// Character offset into the logical text
    Offset(usize),

    /// Verbatim text expected on the target page
    Snippet(String),
}

impl Anchor {
    /// Create an offset anchor.
    pub fn offset(offset: usize) -> Self {
        Anchor::Offset(offset)
    }

    /// Create a snippet anchor.
    pub fn snippet(text: impl Into<String>) -> Self {
        Anchor::Snippet(text.into())
    }
}

/// A bookmark or note as owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Caller-assigned identifier
    pub id: String,

    /// Offset of the bookmarked page's start
    pub offset: Option<usize>,

    /// Leading text of the bookmarked page
    pub snippet: Option<String>,

    /// Optional note text
    pub note: Option<String>,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a bookmark at an offset.
    pub fn new(id: impl Into<String>, offset: usize) -> Self {
        Self {
            id: id.into(),
            offset: Some(offset),
            snippet: None,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Create a legacy bookmark that only carries a snippet.
    pub fn from_snippet(id: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            offset: None,
            snippet: Some(snippet.into()),
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Capture a bookmark for a page: its start offset and leading text.
    pub fn at_page(id: impl Into<String>, page: &VirtualPage, snippet_chars: usize) -> Self {
        let snippet: String = page.normalized_text().chars().take(snippet_chars).collect();
        Self {
            id: id.into(),
            offset: Some(page.start),
            snippet: (!snippet.is_empty()).then_some(snippet),
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Anchors to try, offset first.
    pub fn anchors(&self) -> Vec<Anchor> {
        let mut anchors = Vec::with_capacity(2);
        if let Some(offset) = self.offset {
            anchors.push(Anchor::Offset(offset));
        }
        if let Some(ref snippet) = self.snippet {
            anchors.push(Anchor::Snippet(snippet.clone()));
        }
        anchors
    }
}

/// Reading position reported to the persistence layer after navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// Current page number (1-indexed)
    pub page: usize,

    /// Page count of the current layout
    pub page_count: usize,

    /// Start offset of the current page
    pub offset: usize,

    /// Position through the document in `[0, 1]`
    pub fraction: f32,

    /// When the position was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ReadingProgress {
    /// Record progress at a page.
    ///
    /// The fraction is taken from the offset; without text it falls back to
    /// the page position.
    pub fn new(page: &VirtualPage, page_count: usize, text_len: usize) -> Self {
        let fraction = if text_len > 0 {
            page.start as f32 / text_len as f32
        } else if page_count > 0 {
            page.number() as f32 / page_count as f32
        } else {
            0.0
        };
        Self {
            page: page.number(),
            page_count,
            offset: page.start,
            fraction: fraction.clamp(0.0, 1.0),
            recorded_at: Utc::now(),
        }
    }

    /// Offset anchor for reopening at this position.
    pub fn anchor(&self) -> Anchor {
        Anchor::Offset(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_anchors_order() {
        let bookmark = Bookmark::new("b1", 420).with_snippet("the quick brown fox");
        assert_eq!(
            bookmark.anchors(),
            vec![
                Anchor::Offset(420),
                Anchor::Snippet("the quick brown fox".into())
            ]
        );

        let legacy = Bookmark::from_snippet("b2", "jumps over the dog");
        assert_eq!(legacy.anchors().len(), 1);
    }

    #[test]
    fn test_bookmark_at_page() {
        let mut page = VirtualPage::new(vec!["Hello   world".into(), "again".into()], 80, 120);
        page.index = 3;
        let bookmark = Bookmark::at_page("b", &page, 8).with_note("remember");
        assert_eq!(bookmark.offset, Some(80));
        assert_eq!(bookmark.snippet.as_deref(), Some("Hello wo"));
        assert_eq!(bookmark.note.as_deref(), Some("remember"));
    }

    #[test]
    fn test_reading_progress_fraction() {
        let mut page = VirtualPage::new(vec!["text".into()], 250, 300);
        page.index = 2;
        let progress = ReadingProgress::new(&page, 4, 1000);
        assert_eq!(progress.page, 3);
        assert_eq!(progress.offset, 250);
        assert!((progress.fraction - 0.25).abs() < f32::EPSILON);
        assert_eq!(progress.anchor(), Anchor::Offset(250));
    }

    #[test]
    fn test_anchor_json() {
        let json = serde_json::to_string(&Anchor::offset(12)).unwrap();
        assert_eq!(json, r#"{"type":"offset","value":12}"#);
        let back: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Anchor::Offset(12));
    }
}
