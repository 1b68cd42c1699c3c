//! Markdown serialization (IR → Markdown)
//!
//! Blocks are separated by a blank line. Inline siblings stay on one line; only an explicit
//! line break produces a newline inside a block. Text is escaped only where it would otherwise
//! be read back as markup, so ordinary prose comes out untouched.

use crate::error::FormatError;
use crate::ir::nodes::{DocNode, Document, Heading, Image, InlineContent, Link, Verbatim};
use once_cell::sync::Lazy;
use regex::Regex;

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{0,31});").unwrap()
});

/// Serialize an IR document to Markdown
pub fn serialize_to_markdown(doc: &Document) -> Result<String, FormatError> {
    let blocks: Vec<String> = doc
        .children
        .iter()
        .map(serialize_block)
        .filter(|block| !block.trim().is_empty())
        .collect();
    Ok(blocks.join("\n\n"))
}

fn serialize_block(node: &DocNode) -> String {
    match node {
        DocNode::Paragraph(paragraph) => {
            let mut writer = InlineWriter::new(None);
            writer.write_all(&paragraph.content);
            writer.finish()
        }
        DocNode::Heading(heading) => serialize_heading(heading),
        DocNode::Verbatim(verbatim) => serialize_verbatim(verbatim),
        DocNode::ThematicBreak => "---".to_string(),
        DocNode::Html(html) => html.clone(),
    }
}

fn serialize_heading(heading: &Heading) -> String {
    let level = heading.level.clamp(1, 6) as usize;
    let mut writer = InlineWriter::new(Some(' '));
    writer.write_all(&heading.content);
    let text = writer.finish().replace('\n', " ");
    let text = text.trim();

    let marker = "#".repeat(level);
    if text.is_empty() {
        marker
    } else {
        format!("{marker} {}", escape_closing_sequence(text))
    }
}

/// Escape a trailing ` ###` run, which ATX headings would otherwise drop as a closing sequence.
fn escape_closing_sequence(text: &str) -> String {
    let body = text.trim_end_matches('#');
    if body.len() == text.len() || !(body.is_empty() || body.ends_with(' ')) {
        return text.to_string();
    }
    format!("{body}\\{}", &text[body.len()..])
}

fn serialize_verbatim(verbatim: &Verbatim) -> String {
    let fence = "`".repeat((longest_run(&verbatim.content, '`') + 1).max(3));
    let language = verbatim.language.as_deref().unwrap_or("");
    format!("{fence}{language}\n{}\n{fence}", verbatim.content)
}

/// Length of the longest run of `target` in `text`.
fn longest_run(text: &str, target: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == target {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Accumulates inline Markdown, tracking the previous character for context-sensitive escaping.
struct InlineWriter {
    out: String,
    /// Character logically preceding the output (used while the output is still empty)
    lead: Option<char>,
}

impl InlineWriter {
    fn new(lead: Option<char>) -> Self {
        Self {
            out: String::new(),
            lead,
        }
    }

    fn prev(&self) -> Option<char> {
        self.out.chars().next_back().or(self.lead)
    }

    fn at_line_start(&self) -> bool {
        match self.out.chars().next_back() {
            Some(c) => c == '\n',
            None => self.lead.is_none(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write_all(&mut self, content: &[InlineContent]) {
        for inline in content {
            self.write(inline);
        }
    }

    fn write(&mut self, inline: &InlineContent) {
        match inline {
            InlineContent::Text(text) => {
                let escaped = escape_text(text, self.prev(), self.at_line_start());
                self.out.push_str(&escaped);
            }
            InlineContent::Bold(children) => self.write_delimited("**", children),
            InlineContent::Italic(children) => self.write_delimited("*", children),
            InlineContent::Strikethrough(children) => self.write_delimited("~~", children),
            InlineContent::Code(code) => self.out.push_str(&code_span(code)),
            InlineContent::Link(link) => self.write_link(link),
            InlineContent::Image(image) => self.out.push_str(&image_markup(image)),
            InlineContent::LineBreak => self.out.push('\n'),
            InlineContent::Html(html) => self.out.push_str(html),
        }
    }

    /// Wrap `children` in `delimiter`, moving edge whitespace outside so the markup still opens
    /// and closes where CommonMark allows it.
    fn write_delimited(&mut self, delimiter: &str, children: &[InlineContent]) {
        let lead = delimiter.chars().next_back();
        let mut inner = InlineWriter::new(lead);
        inner.write_all(children);
        let inner = inner.finish();

        let core = inner.trim();
        if core.is_empty() {
            self.out.push_str(&inner);
            return;
        }

        let leading = &inner[..inner.len() - inner.trim_start().len()];
        let trailing = &inner[inner.trim_end().len()..];
        self.out.push_str(leading);
        self.out.push_str(delimiter);
        self.out.push_str(core);
        self.out.push_str(delimiter);
        self.out.push_str(trailing);
    }

    fn write_link(&mut self, link: &Link) {
        let mut inner = InlineWriter::new(Some('['));
        inner.write_all(&link.content);
        self.out.push('[');
        self.out.push_str(&inner.finish());
        self.out.push_str("](");
        self.out.push_str(&destination(&link.url));
        push_title(&mut self.out, link.title.as_deref());
        self.out.push(')');
    }
}

fn image_markup(image: &Image) -> String {
    let mut out = String::from("![");
    for c in image.alt.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push_str("](");
    out.push_str(&destination(&image.src));
    push_title(&mut out, image.title.as_deref());
    out.push(')');
    out
}

fn destination(url: &str) -> String {
    if url.is_empty() || url.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{}>", url.replace('<', "%3C").replace('>', "%3E"))
    } else {
        url.to_string()
    }
}

fn push_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title {
        out.push_str(" \"");
        out.push_str(&title.replace('\\', "\\\\").replace('"', "\\\""));
        out.push('"');
    }
}

fn code_span(code: &str) -> String {
    let code = code.replace('\n', " ");
    if code.is_empty() {
        return String::new();
    }
    let fence = "`".repeat(longest_run(&code, '`') + 1);
    let needs_padding = code.starts_with('`')
        || code.ends_with('`')
        || (code.starts_with(' ') && code.ends_with(' ') && !code.trim().is_empty());
    if needs_padding {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

fn is_space(c: Option<char>) -> bool {
    c.map_or(true, char::is_whitespace)
}

/// Escape characters in `text` that Markdown would read as markup.
///
/// `prev` is the character already written before `text` (`None` at the start of a block).
/// The character after `text` is unknown and treated as non-whitespace.
fn escape_text(text: &str, prev: Option<char>, at_line_start: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = prev;
    let mut line_start = at_line_start;

    for line in text.split_inclusive('\n') {
        let marker = if line_start {
            line_start_marker(line)
        } else {
            None
        };

        let mut chars = line.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            let next = chars.peek().map(|&(_, next)| next);
            let rest = &line[index..];
            let escape = Some(index) == marker
                || match c {
                    '\\' | '`' => true,
                    '*' => !(is_space(prev) && next.map_or(false, char::is_whitespace)),
                    '_' => {
                        let both_alnum = prev.map_or(false, char::is_alphanumeric)
                            && next.map_or(false, char::is_alphanumeric);
                        let both_space =
                            is_space(prev) && next.map_or(false, char::is_whitespace);
                        !(both_alnum || both_space)
                    }
                    '~' => prev == Some('~') || next == Some('~'),
                    '[' => rest.contains("](") || rest.contains("]["),
                    '<' => next.is_some_and(|n| n.is_ascii_alphabetic() || "/!?".contains(n)),
                    '&' => ENTITY.is_match(rest),
                    _ => false,
                };
            if escape {
                out.push('\\');
            }
            out.push(c);
            prev = Some(c);
        }
        line_start = line.ends_with('\n');
    }
    out
}

/// Byte offset of the character that would open a block construct at the start of `line`.
fn line_start_marker(line: &str) -> Option<usize> {
    let content = line.trim_end_matches('\n');
    let indent = content.len() - content.trim_start_matches(|c: char| c == ' ' || c == '\t').len();
    let rest = &content[indent..];
    let first = rest.chars().next()?;
    let followed_by_space = |len: usize| {
        rest[len..]
            .chars()
            .next()
            .map_or(true, |c| c == ' ' || c == '\t')
    };

    match first {
        '#' => {
            let hashes = rest.len() - rest.trim_start_matches('#').len();
            (hashes <= 6 && followed_by_space(hashes)).then_some(indent)
        }
        '>' => Some(indent),
        '-' | '+' | '*' if followed_by_space(1) => Some(indent),
        '-' | '=' if rest.trim_end().chars().all(|c| c == first) => Some(indent),
        '0'..='9' => {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            let delimiter = rest[digits..].chars().next()?;
            (digits <= 9 && matches!(delimiter, '.' | ')') && followed_by_space(digits + 1))
                .then_some(indent + digits)
        }
        _ => None,
    }
}
