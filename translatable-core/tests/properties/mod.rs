//! Property tests for the round-trip laws.

use proptest::prelude::*;
use translatable_core::{
    blocks_from_markdown, filter, from_display, html_to_markdown, markdown_from_blocks,
    markdown_to_html, to_display, Filter, FilterList,
};

fn whitespace_filters() -> FilterList {
    FilterList::new()
        .with(Filter::literal("\t", " ").unwrap())
        .with(Filter::pattern(r" {2,}", " ").unwrap())
}

fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{1,8}", 1..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn display_round_trip(text in any::<String>()) {
        prop_assert_eq!(from_display(&to_display(&text)), text);
    }

    #[test]
    fn segmentation_round_trip(markdown in "[a-z \n]{0,40}") {
        let blocks = blocks_from_markdown(&markdown);
        if blocks.is_empty() {
            prop_assert!(markdown.split("\n\n").all(str::is_empty));
        } else {
            prop_assert_eq!(markdown_from_blocks(&blocks), markdown);
        }
    }

    #[test]
    fn filters_are_idempotent_without_reentry(text in "[a-z \t]{0,40}") {
        let filters = whitespace_filters();
        let once = filter(&text, &filters);
        prop_assert_eq!(filter(&once, &filters), once.clone());
    }

    #[test]
    fn empty_filter_list_is_identity(text in any::<String>()) {
        prop_assert_eq!(filter(&text, &FilterList::default()), text);
    }

    #[test]
    fn plain_paragraphs_round_trip(paragraphs in prop::collection::vec(paragraph_strategy(), 1..5)) {
        let markdown = paragraphs.join("\n\n");
        let html = markdown_to_html(&markdown, &FilterList::default());
        prop_assert_eq!(html_to_markdown(&html, &FilterList::default()), markdown);
    }

    #[test]
    fn conversions_never_panic(text in any::<String>()) {
        let html = markdown_to_html(&text, &FilterList::default());
        let _ = html_to_markdown(&html, &FilterList::default());
        let _ = html_to_markdown(&text, &FilterList::default());
    }
}
