//! Markdown parsing (Markdown → IR)
//!
//! Pipeline: Markdown string → Comrak AST → IR

use crate::error::FormatError;
use crate::ir::nodes::{
    inline_plain_text, DocNode, Document, Heading, Image, InlineContent, Link, Paragraph, Verbatim,
};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse Markdown string to an IR document
pub fn parse_from_markdown(source: &str) -> Result<Document, FormatError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut children = Vec::new();
    collect_blocks(root, &mut children);
    Ok(Document::new(children))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.strikethrough = true;
    options
}

/// Map the block children of `node` to IR nodes.
///
/// Containers outside the supported subset (lists, block quotes) are flattened: their
/// paragraphs and headings are emitted in document order.
fn collect_blocks<'a>(node: &'a AstNode<'a>, out: &mut Vec<DocNode>) {
    for child in node.children() {
        let data = child.data.borrow();
        match &data.value {
            NodeValue::Paragraph => {
                let content = collect_inline_content(child);
                if !content.is_empty() {
                    out.push(DocNode::Paragraph(Paragraph { content }));
                }
            }
            NodeValue::Heading(heading) => {
                out.push(DocNode::Heading(Heading {
                    level: heading.level,
                    content: collect_inline_content(child),
                }));
            }
            NodeValue::CodeBlock(code_block) => {
                let language = code_block
                    .info
                    .split_whitespace()
                    .next()
                    .map(|lang| lang.to_string());
                let content = code_block
                    .literal
                    .strip_suffix('\n')
                    .unwrap_or(&code_block.literal)
                    .to_string();
                out.push(DocNode::Verbatim(Verbatim { language, content }));
            }
            NodeValue::HtmlBlock(html) => {
                out.push(DocNode::Html(html.literal.trim_end_matches('\n').to_string()));
            }
            NodeValue::ThematicBreak => out.push(DocNode::ThematicBreak),
            _ => collect_blocks(child, out),
        }
    }
}

/// Collect the inline children of `node`.
fn collect_inline_content<'a>(node: &'a AstNode<'a>) -> Vec<InlineContent> {
    let mut content = Vec::new();
    for child in node.children() {
        push_inline(child, &mut content);
    }
    content
}

fn push_inline<'a>(node: &'a AstNode<'a>, content: &mut Vec<InlineContent>) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Text(text) => push_text(content, text),
        NodeValue::SoftBreak | NodeValue::LineBreak => content.push(InlineContent::LineBreak),
        NodeValue::Code(code) => content.push(InlineContent::Code(code.literal.clone())),
        NodeValue::Emph => content.push(InlineContent::Italic(collect_inline_content(node))),
        NodeValue::Strong => content.push(InlineContent::Bold(collect_inline_content(node))),
        NodeValue::Strikethrough => {
            content.push(InlineContent::Strikethrough(collect_inline_content(node)))
        }
        NodeValue::Link(link) => content.push(InlineContent::Link(Link {
            url: link.url.clone(),
            title: non_empty(&link.title),
            content: collect_inline_content(node),
        })),
        NodeValue::Image(link) => content.push(InlineContent::Image(Image {
            src: link.url.clone(),
            alt: inline_plain_text(&collect_inline_content(node)),
            title: non_empty(&link.title),
        })),
        NodeValue::HtmlInline(html) => content.push(InlineContent::Html(html.clone())),
        _ => {
            for child in node.children() {
                push_inline(child, content);
            }
        }
    }
}

/// Append text, merging with a preceding text node.
fn push_text(content: &mut Vec<InlineContent>, text: &str) {
    if let Some(InlineContent::Text(previous)) = content.last_mut() {
        previous.push_str(text);
    } else {
        content.push(InlineContent::Text(text.to_string()));
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
