//! Core data structures for the Intermediate Representation (IR).

/// A block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    Paragraph(Paragraph),
    Heading(Heading),
    Verbatim(Verbatim),
    ThematicBreak,
    /// Raw HTML block carried through from Markdown source
    Html(String),
}

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<DocNode>,
}

impl Document {
    pub fn new(children: Vec<DocNode>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Text content of the whole document, one line per block.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(DocNode::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DocNode {
    pub fn plain_text(&self) -> String {
        match self {
            DocNode::Paragraph(paragraph) => inline_plain_text(&paragraph.content),
            DocNode::Heading(heading) => inline_plain_text(&heading.content),
            DocNode::Verbatim(verbatim) => verbatim.content.clone(),
            DocNode::ThematicBreak => String::new(),
            DocNode::Html(html) => html.clone(),
        }
    }
}

/// Represents a heading with a specific level (1-6).
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<InlineContent>,
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub content: Vec<InlineContent>,
}

/// Represents a block of verbatim text.
#[derive(Debug, Clone, PartialEq)]
pub struct Verbatim {
    pub language: Option<String>,
    pub content: String,
}

/// Represents inline content, such as text, bold, italics, etc.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    Text(String),
    Bold(Vec<InlineContent>),
    Italic(Vec<InlineContent>),
    Strikethrough(Vec<InlineContent>),
    Code(String),
    Link(Link),
    Image(Image),
    LineBreak,
    /// Raw inline HTML carried through from Markdown source
    Html(String),
}

/// Represents a hyperlink.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub content: Vec<InlineContent>,
}

/// Represents an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
}

/// Flatten inline content to its text, line breaks becoming `\n`.
pub fn inline_plain_text(content: &[InlineContent]) -> String {
    let mut text = String::new();
    collect_plain_text(content, &mut text);
    text
}

fn collect_plain_text(content: &[InlineContent], out: &mut String) {
    for inline in content {
        match inline {
            InlineContent::Text(text) | InlineContent::Code(text) | InlineContent::Html(text) => {
                out.push_str(text)
            }
            InlineContent::Bold(children)
            | InlineContent::Italic(children)
            | InlineContent::Strikethrough(children) => collect_plain_text(children, out),
            InlineContent::Link(link) => collect_plain_text(&link.content, out),
            InlineContent::Image(image) => out.push_str(&image.alt),
            InlineContent::LineBreak => out.push('\n'),
        }
    }
}
