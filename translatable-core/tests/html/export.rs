//! Export tests for the HTML format (Markdown → HTML)

use crate::common::{fixture, no_filters, CANONICAL_MARKDOWN};
use insta::assert_snapshot;
use translatable_core::{markdown_to_html, Filter, FilterList};

#[test]
fn test_empty_input() {
    assert_eq!(markdown_to_html("", &no_filters()), "");
    assert_eq!(markdown_to_html("\n\n", &no_filters()), "");
}

#[test]
fn test_heading_and_paragraph() {
    assert_eq!(
        markdown_to_html("# Title\n\nHello *world*", &no_filters()),
        "<h1>Title</h1>\n<p>Hello <em>world</em></p>"
    );
}

#[test]
fn test_setext_heading() {
    assert_eq!(
        markdown_to_html("Title\n-----", &no_filters()),
        "<h2>Title</h2>"
    );
}

#[test]
fn test_image_paragraph() {
    assert_eq!(
        markdown_to_html(CANONICAL_MARKDOWN, &no_filters()),
        "<p><img src=\"https://cdn.door43.org/assets/uw-icons/logo-obs-256.png\" alt=\"drawing\"> \
         # unfoldingWord® Open Bible Stories</p>"
    );
}

#[test]
fn test_raw_html_block_is_kept_and_repaired() {
    let html = markdown_to_html(&fixture("canonical.html"), &no_filters());
    assert_eq!(
        html,
        "<img src=\"https://cdn.door43.org/assets/uw-icons/logo-obs-256.png\" alt=\"drawing\" \
         width=\"100\">\n  # unfoldingWord® Open Bible Stories"
    );
}

#[test]
fn test_kitchensink() {
    let html = markdown_to_html(&fixture("kitchensink.md"), &no_filters());
    assert_snapshot!(html, @r#"
    <h1>unfoldingWord® Open Bible Stories</h1>
    <p><img src="https://cdn.door43.org/assets/uw-icons/logo-obs-256.png" alt="drawing"></p>
    <h2>1. The Creation</h2>
    <p>This is how God made <em>everything</em> in the beginning. He created the <strong>universe</strong> and everything in it in six days.<br>After God created the earth it was <del>dark</del> empty.</p>
    <p>Code like <code>let x = 1;</code> stays inline, and <a href="https://door43.org" title="Door43">links</a> keep their title.</p>
    <hr>
    <pre><code class="language-text">verbatim block</code></pre>
    "#);
}

#[test]
fn test_lists_are_flattened_to_paragraphs() {
    assert_eq!(
        markdown_to_html("- one\n- two", &no_filters()),
        "<p>one</p>\n<p>two</p>"
    );
}

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        markdown_to_html("1 < 2 & 3 > 2", &no_filters()),
        "<p>1 &lt; 2 &amp; 3 &gt; 2</p>"
    );
}

#[test]
fn test_input_filters_run_first() {
    let filters = FilterList::new().with(Filter::pattern(r"\{\{(\w+)\}\}", "**$1**").unwrap());
    assert_eq!(
        markdown_to_html("Hello {{name}}", &filters),
        "<p>Hello <strong>name</strong></p>"
    );
}

#[test]
fn test_raw_html_keeps_nested_content() {
    assert_eq!(
        markdown_to_html("<span>x</span> y", &no_filters()),
        "<p><span>x</span> y</p>"
    );
    assert_eq!(
        markdown_to_html("<div><b>x</b></div>", &no_filters()),
        "<div><b>x</b></div>"
    );
}
