//! HTML serialization (IR → HTML)
//!
//! Pipeline: IR → `RcDom` nodes → html5ever serializer
//!
//! Output is a fragment, not a full page: one serialized element per top-level block, joined
//! by a newline. Raw HTML carried in the IR is re-parsed by html5ever and grafted into the tree,
//! so the result is always well-formed.

use super::dom::{append, create_element, create_text, parse_body, serialize_node};
use crate::error::FormatError;
use crate::ir::nodes::{DocNode, Document, InlineContent, Verbatim};
use markup5ever_rcdom::Handle;

/// Serialize an IR document to an HTML fragment
pub fn serialize_to_html(doc: &Document) -> Result<String, FormatError> {
    let blocks = doc
        .children
        .iter()
        .map(render_block)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n"))
}

fn render_block(node: &DocNode) -> Result<String, FormatError> {
    match node {
        DocNode::Paragraph(paragraph) => {
            serialize_node(&build_inline_container("p", &paragraph.content)?)
        }
        DocNode::Heading(heading) => {
            let tag = format!("h{}", heading.level.clamp(1, 6));
            serialize_node(&build_inline_container(&tag, &heading.content)?)
        }
        DocNode::Verbatim(verbatim) => serialize_node(&build_verbatim(verbatim)),
        DocNode::ThematicBreak => serialize_node(&create_element("hr", vec![])),
        DocNode::Html(html) => parse_body(html).iter().map(serialize_node).collect(),
    }
}

fn build_verbatim(verbatim: &Verbatim) -> Handle {
    let pre = create_element("pre", vec![]);
    let class = verbatim
        .language
        .as_ref()
        .map(|language| format!("language-{language}"));
    let attrs = match &class {
        Some(class) => vec![("class", class.as_str())],
        None => vec![],
    };
    let code = create_element("code", attrs);
    append(&code, create_text(&verbatim.content));
    append(&pre, code);
    pre
}

/// Build `<tag>` holding `content`.
///
/// Content with raw inline HTML is rendered to markup first and re-parsed as a whole, since
/// raw tags may open in one piece and close in another.
fn build_inline_container(tag: &str, content: &[InlineContent]) -> Result<Handle, FormatError> {
    let element = create_element(tag, vec![]);
    if contains_raw_html(content) {
        let markup = inline_markup(content)?;
        for child in parse_body(&markup) {
            append(&element, child);
        }
    } else {
        for inline in content {
            append(&element, build_inline(inline));
        }
    }
    Ok(element)
}

fn contains_raw_html(content: &[InlineContent]) -> bool {
    content.iter().any(|inline| match inline {
        InlineContent::Html(_) => true,
        InlineContent::Bold(children)
        | InlineContent::Italic(children)
        | InlineContent::Strikethrough(children) => contains_raw_html(children),
        InlineContent::Link(link) => contains_raw_html(&link.content),
        _ => false,
    })
}

fn inline_markup(content: &[InlineContent]) -> Result<String, FormatError> {
    let mut markup = String::new();
    for inline in content {
        match inline {
            InlineContent::Html(html) => markup.push_str(html),
            InlineContent::Bold(children) if contains_raw_html(children) => {
                wrap_markup(&mut markup, "strong", "", children)?
            }
            InlineContent::Italic(children) if contains_raw_html(children) => {
                wrap_markup(&mut markup, "em", "", children)?
            }
            InlineContent::Strikethrough(children) if contains_raw_html(children) => {
                wrap_markup(&mut markup, "del", "", children)?
            }
            InlineContent::Link(link) if contains_raw_html(&link.content) => {
                let mut attrs = format!(
                    " href=\"{}\"",
                    html_escape::encode_double_quoted_attribute(&link.url)
                );
                if let Some(title) = &link.title {
                    attrs.push_str(&format!(
                        " title=\"{}\"",
                        html_escape::encode_double_quoted_attribute(title)
                    ));
                }
                wrap_markup(&mut markup, "a", &attrs, &link.content)?
            }
            other => markup.push_str(&serialize_node(&build_inline(other))?),
        }
    }
    Ok(markup)
}

fn wrap_markup(
    markup: &mut String,
    tag: &str,
    attrs: &str,
    children: &[InlineContent],
) -> Result<(), FormatError> {
    markup.push_str(&format!("<{tag}{attrs}>"));
    markup.push_str(&inline_markup(children)?);
    markup.push_str(&format!("</{tag}>"));
    Ok(())
}

fn build_inline(inline: &InlineContent) -> Handle {
    match inline {
        InlineContent::Text(text) => create_text(text),
        InlineContent::Bold(children) => build_wrapper("strong", children),
        InlineContent::Italic(children) => build_wrapper("em", children),
        InlineContent::Strikethrough(children) => build_wrapper("del", children),
        InlineContent::Code(code) => {
            let element = create_element("code", vec![]);
            append(&element, create_text(code));
            element
        }
        InlineContent::Link(link) => {
            let mut attrs = vec![("href", link.url.as_str())];
            if let Some(title) = &link.title {
                attrs.push(("title", title.as_str()));
            }
            let element = create_element("a", attrs);
            for child in &link.content {
                append(&element, build_inline(child));
            }
            element
        }
        InlineContent::Image(image) => {
            let mut attrs = vec![("src", image.src.as_str()), ("alt", image.alt.as_str())];
            if let Some(title) = &image.title {
                attrs.push(("title", title.as_str()));
            }
            create_element("img", attrs)
        }
        InlineContent::LineBreak => create_element("br", vec![]),
        // Raw markup is grafted by build_inline_container; text here is a fallback
        InlineContent::Html(html) => create_text(html),
    }
}

fn build_wrapper(tag: &str, children: &[InlineContent]) -> Handle {
    let element = create_element(tag, vec![]);
    for child in children {
        append(&element, build_inline(child));
    }
    element
}
