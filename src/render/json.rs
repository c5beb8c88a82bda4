//! JSON rendering of page lists.

use crate::error::{Error, Result};
use crate::model::PageList;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a page list to JSON.
pub fn to_json(pages: &PageList, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(pages),
        JsonFormat::Compact => serde_json::to_string(pages),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutBudget, LogicalText};
    use crate::paginate::paginate;

    fn sample() -> PageList {
        let text = LogicalText::from_string("A short paragraph of text.");
        paginate(&text, LayoutBudget::new(200).unwrap()).unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"pages\""));
        assert!(json.contains("\"chars_per_page\": 200"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let back: PageList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
