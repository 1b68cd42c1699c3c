//! Round-trip tests: Markdown → HTML → Markdown must give back the same Markdown for the
//! supported subset.

use crate::common::{fixture, no_filters, CANONICAL_MARKDOWN};
use translatable_core::{html_to_markdown, markdown_to_html};

fn round_trip(markdown: &str) -> String {
    let html = markdown_to_html(markdown, &no_filters());
    html_to_markdown(&html, &no_filters())
}

#[test]
fn test_kitchensink_round_trip() {
    let markdown = fixture("kitchensink.md");
    assert_eq!(round_trip(&markdown), markdown.trim_end());
}

#[test]
fn test_canonical_markdown_round_trip() {
    assert_eq!(round_trip(CANONICAL_MARKDOWN), CANONICAL_MARKDOWN);
}

#[test]
fn test_supported_subset_round_trips() {
    let cases = [
        "Plain paragraph.",
        "# Heading one",
        "###### Heading six",
        "# Issue \\#",
        "# Learn C#",
        "**bold** and *italic* and ~~struck~~",
        "Inline `code` span",
        "``code with ` tick``",
        "[link](https://example.org)",
        "[link](https://example.org \"With title\")",
        "![alt text](image.png)",
        "![alt](<path with spaces.png>)",
        "first line\nsecond line",
        "Escaped \\*stars\\* and \\_underscores\\_",
        "\\# not a heading",
        "1\\. not a list",
        "snake_case_word and 2 * 3",
        "---",
        "```\nplain code\n```",
        "```rust\nfn main() {}\n```",
        "Paragraph one\n\nParagraph two",
    ];
    for markdown in cases {
        assert_eq!(round_trip(markdown), markdown, "round trip of {markdown:?}");
    }
}

#[test]
fn test_setext_heading_normalizes_to_atx() {
    assert_eq!(round_trip("Title\n====="), "# Title");
}

#[test]
fn test_underscore_emphasis_normalizes_to_stars() {
    assert_eq!(round_trip("_it_ and __bold__"), "*it* and **bold**");
}

#[test]
fn test_hebrew_round_trip() {
    let markdown = "# בְּרֵאשִׁית\n\nבְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ׃";
    assert_eq!(round_trip(markdown), markdown);
}
