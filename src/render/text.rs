//! Plain text rendering of virtual pages.

use crate::error::Result;
use crate::model::PageList;

use super::{page_blocks, DisplayBlock, TextOptions};

/// Render a page list to plain text.
pub fn to_text(pages: &PageList, options: &TextOptions) -> Result<String> {
    let total = pages.len();
    let mut rendered = Vec::new();

    for page in pages.iter().filter(|p| options.page_selection.includes(p.number())) {
        let mut lines = Vec::new();

        if options.include_page_headers {
            let mut header = format!("--- Page {} / {}", page.number(), total);
            if options.include_offsets {
                header.push_str(&format!(" [{}, {})", page.start, page.end));
                if let Some(label) = page.source_label() {
                    header.push(' ');
                    header.push_str(&label);
                }
            }
            header.push_str(" ---");
            lines.push(header);
        }

        for block in page_blocks(page, &options.title_rule) {
            match block {
                DisplayBlock::Heading(text) => {
                    lines.push(format!("{}{}", options.heading_prefix, text))
                }
                DisplayBlock::Paragraph(text) => lines.push(text),
            }
        }

        rendered.push(lines.join("\n\n"));
    }

    Ok(rendered.join(&options.page_separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutBudget, LogicalText};
    use crate::paginate::paginate;
    use crate::render::PageSelection;

    fn sample() -> PageList {
        let text = LogicalText::from_string(
            "Hello, world! A first paragraph.\n\nCHAPTER TWO\n\nSecond paragraph text.",
        );
        paginate(&text, LayoutBudget::new(500).unwrap()).unwrap()
    }

    #[test]
    fn test_to_text() {
        let result = to_text(&sample(), &TextOptions::default()).unwrap();

        assert!(result.starts_with("--- Page 1 / 2 ---"));
        assert!(result.contains("Hello, world!"));
        assert!(result.contains("# CHAPTER TWO"));
        assert!(result.contains("--- Page 2 / 2 ---"));
    }

    #[test]
    fn test_to_text_offsets_and_selection() {
        let options = TextOptions::new()
            .with_offsets(true)
            .with_pages(PageSelection::Pages(vec![2]));
        let result = to_text(&sample(), &options).unwrap();

        assert!(result.starts_with("--- Page 2 / 2 [34, 69) p. 1 ---"));
        assert!(!result.contains("Hello"));
    }

    #[test]
    fn test_to_text_without_headers() {
        let options = TextOptions::new().with_page_headers(false);
        let result = to_text(&sample(), &options).unwrap();
        assert!(result.starts_with("Hello, world!"));
    }
}
