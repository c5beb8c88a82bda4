//! Integration tests for the pagination engine.

mod common;

use repage::{
    paginate, paginate_pages, Error, LayoutBudget, LogicalText, PageList, PaginateOptions,
    Paginator, TitleRule,
};

fn budget(chars: usize) -> LayoutBudget {
    LayoutBudget::new(chars).unwrap()
}

fn assert_well_formed(text: &LogicalText, pages: &PageList) {
    let first = pages.pages.first().expect("non-empty output");
    let last = pages.pages.last().expect("non-empty output");
    assert_eq!(first.start, 0);
    assert_eq!(last.end, text.len());

    for (index, page) in pages.iter().enumerate() {
        assert_eq!(page.index, index);
        assert!(page.start < page.end, "empty range on page {}", index);
    }

    for pair in pages.pages.windows(2) {
        assert!(
            pair[0].start < pair[1].start,
            "starts not increasing: {} then {}",
            pair[0].start,
            pair[1].start
        );
        assert!(pair[0].end <= pair[1].start);
        assert!(
            pair[1].start - pair[0].end <= LogicalText::DELIMITER_CHARS,
            "gap between {} and {}",
            pair[0].end,
            pair[1].start
        );
    }
}

#[test]
fn test_pagination_is_deterministic() {
    let text = common::sample_text();
    for chars in [100, 350, 1200, 5000] {
        let first = paginate(&text, budget(chars)).unwrap();
        let second = paginate(&text, budget(chars)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_pages_cover_text() {
    let text = common::sample_text();
    for chars in [100, 237, 640, 1500, 4000] {
        let pages = paginate(&text, budget(chars)).unwrap();
        assert_eq!(pages.stats.dropped_page_count, 0);
        assert_well_formed(&text, &pages);
    }
}

#[test]
fn test_page_ranges_match_content() {
    let text = common::sample_text();
    let pages = paginate(&text, budget(400)).unwrap();

    for page in &pages {
        let covered = text.slice(page.start, page.end);
        if page.split {
            assert_eq!(covered, page.content[0]);
        } else {
            assert!(covered.starts_with(&page.content[0]));
            for paragraph in &page.content {
                assert!(covered.contains(paragraph.as_str()));
            }
        }
    }
}

#[test]
fn test_minimum_budget_floor_terminates() {
    let text = common::sample_text();
    let pages = paginate(&text, LayoutBudget::new(1).unwrap()).unwrap();

    assert_eq!(pages.budget.chars_per_page(), LayoutBudget::MIN_CHARS_PER_PAGE);
    assert!(!pages.is_empty());
    assert!(pages.len() <= text.len());
    for page in pages.iter().filter(|p| p.split) {
        assert!(page.content[0].chars().count() <= LayoutBudget::MIN_CHARS_PER_PAGE);
    }
}

#[test]
fn test_zero_budget_is_invalid() {
    assert!(matches!(LayoutBudget::new(0), Err(Error::InvalidBudget(_))));
}

#[test]
fn test_empty_input_yields_zero_pages() {
    let pages = paginate_pages(["", "   ", "short"], budget(500)).unwrap();
    assert!(pages.is_empty());
    assert_eq!(pages.clamp_page_number(1), None);
}

#[test]
fn test_titles_never_share_page_with_preceding_content() {
    let text = common::sample_text();
    let rule = TitleRule::default();

    for chars in [150, 600, 3000, 20_000] {
        let pages = paginate(&text, budget(chars)).unwrap();
        for page in &pages {
            for paragraph in page.content.iter().skip(1) {
                assert!(
                    !rule.is_title(paragraph),
                    "title {:?} follows content on page {}",
                    paragraph,
                    page.index
                );
            }
        }
        assert_eq!(pages.stats.title_count, 4);
    }
}

#[test]
fn test_title_isolation_example() {
    let pages = paginate_pages(
        [
            "An opening paragraph before any chapter heading.",
            "CHAPTER ONE",
            "The chapter text begins here.",
        ],
        budget(5000),
    )
    .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages.pages[1].content[0], "CHAPTER ONE");
}

#[test]
fn test_oversize_paragraph_without_boundaries() {
    let chars = 200;
    let paragraph = "x".repeat(5 * chars);
    let pages = paginate_pages([paragraph], budget(chars)).unwrap();

    assert!((4..=6).contains(&pages.len()));
    for page in &pages {
        assert!(page.split);
        assert!(page.content[0].chars().count() <= chars);
    }
    assert_eq!(pages.stats.split_paragraph_count, 1);
    assert_eq!(pages.stats.chunk_page_count, pages.len());
}

#[test]
fn test_oversize_chunks_respect_budget() {
    let text = common::sample_text();
    for chars in [100, 180, 333] {
        let pages = paginate(&text, budget(chars)).unwrap();
        for page in pages.iter().filter(|p| p.split) {
            assert!(page.content[0].chars().count() <= chars);
        }
    }
}

#[test]
fn test_introduction_end_to_end() {
    let body = format!("{}ends.", "word ".repeat(59));
    assert_eq!(body.chars().count(), 300);
    let closing = format!("{}.", "z".repeat(49));
    assert_eq!(closing.chars().count(), 50);

    let pages = paginate_pages(["INTRODUCTION", &body, &closing], budget(200)).unwrap();

    assert_eq!(pages.pages[0].content, vec!["INTRODUCTION".to_string()]);
    assert!(!pages.pages[0].split);

    let chunks: Vec<_> = pages.iter().filter(|p| p.split).collect();
    assert_eq!(chunks.len(), 2);
    for chunk in &chunks {
        let len = chunk.content[0].chars().count();
        assert!(len <= 200);
        assert!(len >= 100);
    }

    let last = pages.pages.last().unwrap();
    assert_eq!(last.content, vec![closing]);
    assert!(!last.split);
    assert_eq!(pages.len(), 4);
}

#[test]
fn test_custom_spacing_cost_packs_more() {
    let text = common::sample_text();
    let standard = paginate(&text, budget(800)).unwrap();
    let tight = Paginator::new(PaginateOptions::new().with_spacing_cost(0))
        .paginate(&text, budget(800))
        .unwrap();
    assert!(tight.len() <= standard.len());
}

#[test]
fn test_smaller_budget_never_fewer_pages() {
    let text = common::sample_text();
    let large = paginate(&text, budget(3000)).unwrap();
    let small = paginate(&text, budget(300)).unwrap();
    assert!(small.len() > large.len());
}

#[test]
fn test_pages_report_source_pages() {
    let text = common::sample_text();
    let source_count = common::sample_pages().len() as u32;

    for chars in [150, 700, 3000] {
        let pages = paginate(&text, budget(chars)).unwrap();
        let ranges: Vec<_> = pages
            .iter()
            .map(|p| p.source_pages.clone().expect("every page has a source"))
            .collect();

        assert_eq!(*ranges[0].start(), 1);
        assert_eq!(*ranges.last().unwrap().end(), source_count);
        for pair in ranges.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
        for (page, range) in pages.iter().zip(&ranges) {
            if page.split {
                assert_eq!(range.start(), range.end());
            }
        }
    }

    // A title always opens its own source page
    let pages = paginate(&text, budget(3000)).unwrap();
    let second_chapter = pages
        .iter()
        .find(|p| p.content[0] == "CHAPTER TWO")
        .unwrap();
    assert_eq!(second_chapter.source_pages.as_ref().map(|r| *r.start()), Some(8));
    assert!(second_chapter.source_label().unwrap().starts_with("pp. 8-"));
}
