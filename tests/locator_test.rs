//! Integration tests for anchor resolution across re-pagination.

mod common;

use repage::{locate, paginate, Anchor, Bookmark, LayoutBudget, LocateOptions, Locator};

fn budget(chars: usize) -> LayoutBudget {
    LayoutBudget::new(chars).unwrap()
}

#[test]
fn test_offset_anchor_stable_under_repagination() {
    let text = common::sample_text();
    let before = paginate(&text, budget(300)).unwrap();
    let after = paginate(&text, budget(1100)).unwrap();

    for offset in (0..text.len()).step_by(37) {
        assert!(locate(&before.pages, &Anchor::Offset(offset)).is_some());

        let index = locate(&after.pages, &Anchor::Offset(offset))
            .unwrap_or_else(|| panic!("offset {} not located", offset));
        let best = after.pages[index].distance_to(offset);
        for (other, page) in after.iter().enumerate() {
            assert!(
                best <= page.distance_to(offset),
                "offset {}: page {} at distance {} beats chosen page {} at {}",
                offset,
                other,
                page.distance_to(offset),
                index,
                best
            );
        }
    }
}

#[test]
fn test_page_start_anchor_lands_on_containing_page() {
    let text = common::sample_text();
    let small = paginate(&text, budget(250)).unwrap();
    let large = paginate(&text, budget(2000)).unwrap();

    for page in &small {
        let anchor = Anchor::Offset(page.start);
        let index = locate(&large.pages, &anchor).unwrap();
        assert!(large.pages[index].contains_offset(page.start));
    }

    // And back again
    for page in &large {
        let index = locate(&small.pages, &Anchor::Offset(page.start)).unwrap();
        assert!(small.pages[index].contains_offset(page.start));
    }
}

#[test]
fn test_offset_resolution_not_by_index() {
    let text = common::sample_text();
    let small = paginate(&text, budget(200)).unwrap();
    let large = paginate(&text, budget(4000)).unwrap();
    assert!(small.len() > large.len());

    let page = &small.pages[small.len() - 2];
    let index = locate(&large.pages, &Anchor::Offset(page.start)).unwrap();
    assert_ne!(index, page.index);
    assert!(large.pages[index].contains_offset(page.start));
}

#[test]
fn test_offset_past_end_within_tolerance() {
    let text = common::sample_text();
    let pages = paginate(&text, budget(500)).unwrap();
    let last = pages.len() - 1;

    assert_eq!(
        locate(&pages.pages, &Anchor::Offset(text.len() + 10)),
        Some(last)
    );
    assert_eq!(locate(&pages.pages, &Anchor::Offset(text.len() + 5000)), None);
}

#[test]
fn test_snippet_anchor_after_repagination() {
    let text = common::sample_text();
    let before = paginate(&text, budget(300)).unwrap();
    let after = paginate(&text, budget(1800)).unwrap();

    let source = before.iter().filter(|p| !p.split).nth(3).unwrap();
    let bookmark = Locator::new(LocateOptions::new().with_snippet_capture_chars(40))
        .capture("b", source);
    let snippet = bookmark.snippet.clone().unwrap();
    assert_eq!(snippet.chars().count(), 40);

    let legacy = Bookmark::from_snippet("legacy", snippet.clone());
    let index = Locator::default()
        .locate_bookmark(&after.pages, &legacy)
        .unwrap();
    assert!(after.pages[index].normalized_text().contains(&snippet));

    // The first matching page wins
    let first = after
        .iter()
        .position(|p| p.normalized_text().contains(&snippet))
        .unwrap();
    assert_eq!(index, first);
}

#[test]
fn test_locate_is_reproducible() {
    let text = common::sample_text();
    let pages = paginate(&text, budget(700)).unwrap();
    let anchors = [
        Anchor::Offset(0),
        Anchor::Offset(text.len() / 3),
        Anchor::snippet("moves the story along"),
    ];
    for anchor in &anchors {
        assert_eq!(locate(&pages.pages, anchor), locate(&pages.pages, anchor));
    }
}
