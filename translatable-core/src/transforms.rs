//! Conversion entry points between Markdown and editable HTML
//!
//! These are the functions the editing surfaces call. Unlike the [`Format`] layer they never
//! fail: malformed HTML is repaired by the parser, and if a serializer ever errors the result
//! degrades to escaped text (Markdown → HTML) or plain text content (HTML → Markdown).

use crate::filter::FilterList;
use crate::format::Format;
use crate::formats::html::{parser::html_text_content, HtmlFormat};
use crate::formats::markdown::MarkdownFormat;

/// Render Markdown to an HTML fragment, applying `filters` to the Markdown first
///
/// # Example
///
/// ```
/// use translatable_core::{markdown_to_html, FilterList};
///
/// let html = markdown_to_html("# Title", &FilterList::default());
/// assert_eq!(html, "<h1>Title</h1>");
/// ```
pub fn markdown_to_html(markdown: &str, filters: &FilterList) -> String {
    let markdown = filters.apply(markdown);
    let rendered = MarkdownFormat
        .parse(&markdown)
        .and_then(|doc| HtmlFormat.serialize(&doc));

    match rendered {
        Ok(html) => html,
        Err(err) => {
            log::debug!("Markdown to HTML failed, falling back to escaped text: {err}");
            html_escape::encode_text(&markdown).into_owned()
        }
    }
}

/// Convert an HTML fragment back to Markdown, applying `filters` to the resulting Markdown
///
/// # Example
///
/// ```
/// use translatable_core::{html_to_markdown, FilterList};
///
/// let markdown = html_to_markdown("<p>Hello <b>world</b></p>", &FilterList::default());
/// assert_eq!(markdown, "Hello **world**");
/// ```
pub fn html_to_markdown(html: &str, filters: &FilterList) -> String {
    let converted = HtmlFormat
        .parse(html)
        .and_then(|doc| MarkdownFormat.serialize(&doc));

    let markdown = match converted {
        Ok(markdown) => markdown,
        Err(err) => {
            log::debug!("HTML to Markdown failed, falling back to text content: {err}");
            html_text_content(html)
        }
    };
    filters.apply(&markdown)
}
