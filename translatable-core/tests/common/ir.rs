//! Tests for the IR shared by both formats.

use translatable_core::format::Format;
use translatable_core::formats::{HtmlFormat, MarkdownFormat};
use translatable_core::ir::nodes::{DocNode, InlineContent};

#[test]
fn test_both_formats_agree_on_ir() {
    let from_markdown = MarkdownFormat
        .parse("## Title\n\nHello **bold** and *it*")
        .unwrap();
    let from_html = HtmlFormat
        .parse("<h2>Title</h2><p>Hello <strong>bold</strong> and <em>it</em></p>")
        .unwrap();
    assert_eq!(from_markdown, from_html);
}

#[test]
fn test_image_alt_text_is_plain() {
    let doc = MarkdownFormat.parse("![a **b**](x.png)").unwrap();
    match &doc.children[..] {
        [DocNode::Paragraph(paragraph)] => match &paragraph.content[..] {
            [InlineContent::Image(image)] => assert_eq!(image.alt, "a b"),
            other => panic!("Expected a single image, got {other:?}"),
        },
        other => panic!("Expected a single paragraph, got {other:?}"),
    }
}
