//! Import tests for the HTML format (HTML → Markdown)
//!
//! These run the public `html_to_markdown` entry point on markup as an editing surface
//! produces it.

use crate::common::{fixture, no_filters, CANONICAL_MARKDOWN};
use insta::assert_snapshot;
use translatable_core::{html_to_markdown, markdown_to_html, Filter, FilterList};

#[test]
fn test_canonical_fixture() {
    let html = fixture("canonical.html");
    assert_eq!(html_to_markdown(&html, &no_filters()), CANONICAL_MARKDOWN);
}

#[test]
fn test_canonical_fixture_with_trailing_newline() {
    let html = format!("{}\n", fixture("canonical.html"));
    assert_eq!(html_to_markdown(&html, &no_filters()), CANONICAL_MARKDOWN);
}

#[test]
fn test_empty_input() {
    assert_eq!(html_to_markdown("", &no_filters()), "");
    assert_eq!(html_to_markdown("<p></p><div><br></div>", &no_filters()), "");
}

#[test]
fn test_block_elements_are_separated_by_blank_lines() {
    let html = "<h1>Title</h1><p>First paragraph.</p><p>Second paragraph.</p><hr>";
    assert_snapshot!(html_to_markdown(html, &no_filters()), @r"
    # Title

    First paragraph.

    Second paragraph.

    ---
    ");
}

#[test]
fn test_contenteditable_line_divs() {
    let html = "First line<div>Second line</div><div><br></div><div>Fourth line</div>";
    assert_eq!(
        html_to_markdown(html, &no_filters()),
        "First line\n\nSecond line\n\nFourth line"
    );
}

#[test]
fn test_inline_formatting() {
    let html = "<p>A <b>bold</b>, <i>italic</i>, <del>struck</del> and <code>code</code> word.</p>";
    assert_eq!(
        html_to_markdown(html, &no_filters()),
        "A **bold**, *italic*, ~~struck~~ and `code` word."
    );
}

#[test]
fn test_line_breaks_inside_paragraph() {
    let html = "<p>Line one<br>Line two<br/>Line three</p>";
    assert_eq!(
        html_to_markdown(html, &no_filters()),
        "Line one\nLine two\nLine three"
    );
}

#[test]
fn test_text_that_looks_like_markdown_is_escaped() {
    let html = "<p>Line one<br># not a heading<br>1. not a list</p>";
    assert_eq!(
        html_to_markdown(html, &no_filters()),
        "Line one\n\\# not a heading\n1\\. not a list"
    );
}

#[test]
fn test_links_keep_href_and_title() {
    let html = "<p>See <a href=\"https://door43.org\" title=\"Door43\">Door43</a>.</p>";
    assert_eq!(
        html_to_markdown(html, &no_filters()),
        "See [Door43](https://door43.org \"Door43\")."
    );
}

#[test]
fn test_scripts_and_comments_are_dropped() {
    let html = "<p>Safe<script>alert(1)</script><!-- hidden --> text</p><style>p { color: red }</style>";
    assert_eq!(html_to_markdown(html, &no_filters()), "Safe text");
}

#[test]
fn test_malformed_html_never_fails() {
    assert_eq!(
        html_to_markdown("<p><b>unclosed <i>tags</p>", &no_filters()),
        "**unclosed *tags***"
    );
    assert_eq!(html_to_markdown("<div>a</span>b</div>", &no_filters()), "ab");
}

#[test]
fn test_output_filters_apply_to_markdown() {
    let filters = FilterList::new()
        .with(Filter::literal("\u{a0}", " ").unwrap())
        .with(Filter::pattern(r"\*\*(\w+)\*\*", "__${1}__").unwrap());
    assert_eq!(
        html_to_markdown("<p>Hello&nbsp;<b>world</b></p>", &filters),
        "Hello __world__"
    );
}

#[test]
fn test_hebrew_text_passes_through() {
    let html = "<p>בְּרֵאשִׁית בָּרָא אֱלֹהִים</p>";
    assert_eq!(html_to_markdown(html, &no_filters()), "בְּרֵאשִׁית בָּרָא אֱלֹהִים");
}

#[test]
fn test_nested_markup_survives_parsing() {
    assert_eq!(
        html_to_markdown("<p>Hello <b>dear <i>world</i></b></p>", &no_filters()),
        "Hello **dear *world***"
    );
    assert_eq!(
        html_to_markdown("<div><p><a href=\"u\"><b>x</b></a></p></div>", &no_filters()),
        "[**x**](u)"
    );
}

#[test]
fn test_adjacent_emphasis_reads_back_as_emphasis() {
    let cases = [
        ("<b>a</b><b>b</b>", "**ab**", "<p><strong>ab</strong></p>"),
        ("<i>a</i><i>b</i>", "*ab*", "<p><em>ab</em></p>"),
        ("<s>a</s><del>b</del>", "~~ab~~", "<p><del>ab</del></p>"),
    ];
    for (html, markdown, rendered) in cases {
        let converted = html_to_markdown(html, &no_filters());
        assert_eq!(converted, markdown, "converting {html:?}");
        assert_eq!(markdown_to_html(&converted, &no_filters()), rendered);
    }
}

#[test]
fn test_head_elements_keep_their_text() {
    assert_eq!(
        html_to_markdown("<title>Chapter 1</title>Body", &no_filters()),
        "Chapter 1\n\nBody"
    );
    assert_eq!(
        html_to_markdown("<noscript>Enable JS</noscript>", &no_filters()),
        "Enable JS"
    );
}

#[test]
fn test_heading_ending_in_hash() {
    let markdown = html_to_markdown("<h1>Issue #</h1>", &no_filters());
    assert_eq!(markdown, "# Issue \\#");
    assert_eq!(
        markdown_to_html(&markdown, &no_filters()),
        "<h1>Issue #</h1>"
    );
}
