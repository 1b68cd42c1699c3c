//! HTML parsing (HTML → IR)
//!
//! Pipeline: HTML fragment → html5ever `RcDom` → tree walk → IR
//!
//! The walk distinguishes flow content (block elements, which start and end paragraphs) from
//! phrasing content (everything else, which accumulates into the current paragraph). Text is
//! whitespace-collapsed the way a browser renders it: runs of whitespace become one space,
//! and whitespace at the start or end of a block disappears.

use super::dom::{attribute, element_name, is_dropped, parse_body, text_content};
use crate::error::FormatError;
use crate::ir::nodes::{DocNode, Document, Heading, Image, InlineContent, Link, Paragraph, Verbatim};
use markup5ever_rcdom::{Handle, NodeData};

/// Parse an HTML fragment into an IR document
pub fn parse_from_html(source: &str) -> Result<Document, FormatError> {
    let mut builder = BlockBuilder::default();
    for node in parse_body(source) {
        builder.visit(&node);
    }
    Ok(builder.finish())
}

/// Plain text content of an HTML fragment, ignoring all markup
pub fn html_text_content(source: &str) -> String {
    parse_body(source).iter().map(text_content).collect()
}

fn is_flow_container(tag: &str) -> bool {
    matches!(
        tag,
        "div"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "main"
            | "nav"
            | "aside"
            | "blockquote"
            | "ul"
            | "ol"
            | "li"
            | "dl"
            | "dt"
            | "dd"
            | "table"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
            | "caption"
            | "figure"
            | "figcaption"
            | "address"
            | "details"
            | "summary"
            | "form"
            | "fieldset"
            | "title"
            | "body"
            | "html"
    )
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<DocNode>,
    inline: InlineBuilder,
}

impl BlockBuilder {
    fn finish(mut self) -> Document {
        self.flush();
        Document::new(self.blocks)
    }

    /// Close the paragraph being accumulated, if it has any content.
    fn flush(&mut self) {
        let content = self.inline.finish();
        if !content.is_empty() {
            self.blocks.push(DocNode::Paragraph(Paragraph { content }));
        }
    }

    fn visit_children(&mut self, node: &Handle) {
        for child in node.children.borrow().iter() {
            self.visit(child);
        }
    }

    fn visit(&mut self, node: &Handle) {
        let Some(tag) = element_name(node) else {
            match &node.data {
                NodeData::Comment { .. } => log::debug!("Dropping HTML comment"),
                NodeData::Text { .. } => self.inline.visit(node),
                _ => self.visit_children(node),
            }
            return;
        };

        if let Some(level) = heading_level(tag) {
            self.flush();
            let mut inline = InlineBuilder::default();
            inline.visit_children(node);
            let content = inline.finish();
            if !content.is_empty() {
                self.blocks.push(DocNode::Heading(Heading { level, content }));
            }
            return;
        }

        match tag {
            "p" => {
                self.flush();
                self.visit_children(node);
                self.flush();
            }
            "pre" => {
                self.flush();
                self.blocks.push(DocNode::Verbatim(parse_verbatim(node)));
            }
            "hr" => {
                self.flush();
                self.blocks.push(DocNode::ThematicBreak);
            }
            tag if is_dropped(tag) => log::debug!("Dropping <{tag}> element"),
            tag if is_flow_container(tag) => {
                self.flush();
                self.visit_children(node);
                self.flush();
            }
            _ => self.inline.visit(node),
        }
    }
}

fn parse_verbatim(pre: &Handle) -> Verbatim {
    let language = pre.children.borrow().iter().find_map(|child| {
        if element_name(child) != Some("code") {
            return None;
        }
        attribute(child, "class")?
            .split_whitespace()
            .find_map(|class| class.strip_prefix("language-"))
            .map(str::to_string)
    });

    let text = text_content(pre);
    let content = text.strip_suffix('\n').unwrap_or(&text).to_string();
    Verbatim { language, content }
}

/// Accumulates phrasing content for one block.
struct InlineBuilder {
    content: Vec<InlineContent>,
    /// Whether the last thing emitted was whitespace (or nothing at all)
    last_was_space: bool,
}

impl Default for InlineBuilder {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            last_was_space: true,
        }
    }
}

impl InlineBuilder {
    fn finish(&mut self) -> Vec<InlineContent> {
        trim_trailing_space(&mut self.content);
        while matches!(self.content.last(), Some(InlineContent::LineBreak)) {
            self.content.pop();
            trim_trailing_space(&mut self.content);
        }
        self.last_was_space = true;
        std::mem::take(&mut self.content)
    }

    fn visit_children(&mut self, node: &Handle) {
        for child in node.children.borrow().iter() {
            self.visit(child);
        }
    }

    /// Visit the children of `node` into a fresh list, leaving the current one untouched.
    fn visit_nested(&mut self, node: &Handle) -> Vec<InlineContent> {
        let outer = std::mem::take(&mut self.content);
        self.visit_children(node);
        std::mem::replace(&mut self.content, outer)
    }

    fn visit(&mut self, node: &Handle) {
        let tag = match &node.data {
            NodeData::Text { contents } => {
                self.push_text(&contents.borrow());
                return;
            }
            NodeData::Element { name, .. } => &*name.local,
            NodeData::Comment { .. } => {
                log::debug!("Dropping HTML comment");
                return;
            }
            _ => return,
        };

        match tag {
            "strong" | "b" => {
                let children = self.visit_nested(node);
                self.push_container(InlineContent::Bold(children));
            }
            "em" | "i" => {
                let children = self.visit_nested(node);
                self.push_container(InlineContent::Italic(children));
            }
            "del" | "s" | "strike" => {
                let children = self.visit_nested(node);
                self.push_container(InlineContent::Strikethrough(children));
            }
            "code" | "kbd" | "samp" | "tt" => {
                let code = text_content(node);
                if !code.is_empty() {
                    self.content.push(InlineContent::Code(code));
                    self.last_was_space = false;
                }
            }
            "a" => match attribute(node, "href") {
                Some(url) => {
                    let content = self.visit_nested(node);
                    self.content.push(InlineContent::Link(Link {
                        url,
                        title: attribute(node, "title"),
                        content,
                    }));
                }
                None => self.visit_children(node),
            },
            "img" => {
                let alt = attribute(node, "alt").unwrap_or_default();
                match attribute(node, "src") {
                    Some(src) => {
                        self.content.push(InlineContent::Image(Image {
                            src,
                            alt,
                            title: attribute(node, "title"),
                        }));
                        self.last_was_space = false;
                    }
                    None => self.push_text(&alt),
                }
            }
            "br" => {
                trim_trailing_space(&mut self.content);
                self.content.push(InlineContent::LineBreak);
                self.last_was_space = true;
            }
            tag if is_dropped(tag) => log::debug!("Dropping <{tag}> element"),
            _ => self.visit_children(node),
        }
    }

    fn push_container(&mut self, container: InlineContent) {
        let empty = match &container {
            InlineContent::Bold(children)
            | InlineContent::Italic(children)
            | InlineContent::Strikethrough(children) => children.is_empty(),
            _ => false,
        };
        if empty {
            return;
        }

        // `<b>a</b><b>b</b>` must become `**ab**`: `**a****b**` reads back as literal stars
        push_merged(&mut self.content, container);
    }

    fn push_text(&mut self, text: &str) {
        let mut collapsed = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                if !self.last_was_space {
                    collapsed.push(' ');
                    self.last_was_space = true;
                }
            } else {
                collapsed.push(c);
                self.last_was_space = false;
            }
        }
        if collapsed.is_empty() {
            return;
        }
        if let Some(InlineContent::Text(previous)) = self.content.last_mut() {
            previous.push_str(&collapsed);
        } else {
            self.content.push(InlineContent::Text(collapsed));
        }
    }
}

/// Push `item`, joining it with the last entry when both are text or the same container.
fn push_merged(content: &mut Vec<InlineContent>, item: InlineContent) {
    let mergeable = content.last().is_some_and(|last| {
        matches!(
            (last, &item),
            (InlineContent::Text(_), InlineContent::Text(_))
                | (InlineContent::Bold(_), InlineContent::Bold(_))
                | (InlineContent::Italic(_), InlineContent::Italic(_))
                | (
                    InlineContent::Strikethrough(_),
                    InlineContent::Strikethrough(_)
                )
        )
    });
    if !mergeable {
        content.push(item);
        return;
    }

    match (content.last_mut(), item) {
        (Some(InlineContent::Text(previous)), InlineContent::Text(text)) => {
            previous.push_str(&text);
        }
        (Some(InlineContent::Bold(previous)), InlineContent::Bold(children))
        | (Some(InlineContent::Italic(previous)), InlineContent::Italic(children))
        | (
            Some(InlineContent::Strikethrough(previous)),
            InlineContent::Strikethrough(children),
        ) => {
            for child in children {
                push_merged(previous, child);
            }
        }
        _ => {}
    }
}

/// Remove trailing collapsed whitespace, descending into the last container.
fn trim_trailing_space(content: &mut Vec<InlineContent>) {
    loop {
        let emptied = match content.last_mut() {
            Some(InlineContent::Text(text)) => {
                let len = text.trim_end_matches(' ').len();
                text.truncate(len);
                text.is_empty()
            }
            Some(
                InlineContent::Bold(children)
                | InlineContent::Italic(children)
                | InlineContent::Strikethrough(children),
            ) => {
                trim_trailing_space(children);
                children.is_empty()
            }
            Some(InlineContent::Link(link)) => {
                trim_trailing_space(&mut link.content);
                false
            }
            _ => false,
        };
        if !emptied {
            return;
        }
        content.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> InlineContent {
        InlineContent::Text(value.to_string())
    }

    fn paragraph(content: Vec<InlineContent>) -> DocNode {
        DocNode::Paragraph(Paragraph { content })
    }

    #[test]
    fn test_empty_fragment() {
        assert!(parse_from_html("").unwrap().is_empty());
        assert!(parse_from_html("   \n ").unwrap().is_empty());
    }

    #[test]
    fn test_image_then_text_stays_inline() {
        let doc = parse_from_html("<img src=\"a.png\" alt=\"logo\" width=\"100\"/>\n  # Title").unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![
                InlineContent::Image(Image {
                    src: "a.png".to_string(),
                    alt: "logo".to_string(),
                    title: None,
                }),
                text(" # Title"),
            ])]
        );
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let doc = parse_from_html("<h2> Title </h2>\n<p>First\n   paragraph.</p><p>Second</p>").unwrap();
        assert_eq!(
            doc.children,
            vec![
                DocNode::Heading(Heading {
                    level: 2,
                    content: vec![text("Title")],
                }),
                paragraph(vec![text("First paragraph.")]),
                paragraph(vec![text("Second")]),
            ]
        );
    }

    #[test]
    fn test_inline_markup() {
        let doc =
            parse_from_html("<p><b>bold</b> <i>it</i> <s>gone</s> <code>x</code> <a href=\"u\" title=\"t\">link</a></p>")
                .unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![
                InlineContent::Bold(vec![text("bold")]),
                text(" "),
                InlineContent::Italic(vec![text("it")]),
                text(" "),
                InlineContent::Strikethrough(vec![text("gone")]),
                text(" "),
                InlineContent::Code("x".to_string()),
                text(" "),
                InlineContent::Link(Link {
                    url: "u".to_string(),
                    title: Some("t".to_string()),
                    content: vec![text("link")],
                }),
            ])]
        );
    }

    #[test]
    fn test_adjacent_emphasis_is_merged() {
        let doc = parse_from_html("<p><b>a</b><b>b</b> <i>c</i><i><i>d</i></i><s>e</s></p>").unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![
                InlineContent::Bold(vec![text("ab")]),
                text(" "),
                InlineContent::Italic(vec![text("c"), InlineContent::Italic(vec![text("d")])]),
                InlineContent::Strikethrough(vec![text("e")]),
            ])]
        );
    }

    #[test]
    fn test_nested_adjacent_emphasis_is_merged() {
        let doc = parse_from_html("<b><i>a</i></b><b><i>b</i></b>").unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![InlineContent::Bold(vec![InlineContent::Italic(
                vec![text("ab")]
            )])])]
        );
    }

    #[test]
    fn test_title_keeps_its_text() {
        let doc = parse_from_html("<title>Chapter 1</title>Body").unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![text("Chapter 1")]), paragraph(vec![text("Body")])]
        );
    }

    #[test]
    fn test_line_breaks_trim_surrounding_space() {
        let doc = parse_from_html("one <br> two <br/>").unwrap();
        assert_eq!(
            doc.children,
            vec![paragraph(vec![text("one"), InlineContent::LineBreak, text("two")])]
        );
    }

    #[test]
    fn test_div_lines_become_paragraphs() {
        let doc = parse_from_html("first<div>second</div><div>third</div>").unwrap();
        let texts: Vec<String> = doc.children.iter().map(DocNode::plain_text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_scripts_styles_and_comments_are_dropped() {
        let doc = parse_from_html("<p>a<!-- note --><script>x()</script><style>p{}</style>b</p>").unwrap();
        assert_eq!(doc.children, vec![paragraph(vec![text("ab")])]);
    }

    #[test]
    fn test_unknown_elements_degrade_to_text() {
        let doc = parse_from_html("<custom-tag>hello <span>world</span></custom-tag>").unwrap();
        assert_eq!(doc.children, vec![paragraph(vec![text("hello world")])]);
    }

    #[test]
    fn test_pre_becomes_verbatim() {
        let doc = parse_from_html("<pre><code class=\"language-rust\">fn main() {}\n</code></pre>").unwrap();
        assert_eq!(
            doc.children,
            vec![DocNode::Verbatim(Verbatim {
                language: Some("rust".to_string()),
                content: "fn main() {}".to_string(),
            })]
        );
    }

    #[test]
    fn test_image_without_src_keeps_alt_text() {
        let doc = parse_from_html("<img alt=\"missing\">").unwrap();
        assert_eq!(doc.children, vec![paragraph(vec![text("missing")])]);
    }

    #[test]
    fn test_malformed_html_is_repaired() {
        let doc = parse_from_html("<p><b>unclosed <i>nest</p>").unwrap();
        assert_eq!(doc.plain_text(), "unclosed nest");
    }

    #[test]
    fn test_html_text_content() {
        assert_eq!(html_text_content("<p>a <b>b</b></p><script>c</script>"), "a b");
    }
}
