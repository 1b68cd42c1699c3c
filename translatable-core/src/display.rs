//! Display codec for raw-text editing surfaces.
//!
//! Raw Markdown is shown inside a markup-sensitive surface (a contenteditable `<code>` block),
//! so characters that would be read as markup are escaped on the way in and restored on the
//! way out. `&` is escaped along with `<` and `>`, which makes
//! `from_display(to_display(s)) == s` hold for every string.
//!
//! On the way out the surface may also have introduced its own line-break markup (`<br>`,
//! `<div>` wrappers around new lines); those are folded back into `\n` before decoding.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static EMPTY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<div(\s[^>]*)?>\s*<br\s*/?>\s*</div\s*>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static DIV_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<div(\s[^>]*)?>").unwrap());
static DIV_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</div\s*>").unwrap());

/// Escape `text` for display in a raw editing surface.
pub fn to_display(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Reverse [`to_display`], normalizing editing-surface line-break artifacts to `\n`.
pub fn from_display(text: &str) -> String {
    let text = normalize_line_breaks(text);
    html_escape::decode_html_entities(&text).into_owned()
}

fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    // Browsers encode "x\n\ny" as `x<div><br></div><div>y</div>`
    let starts_with_div = DIV_OPEN.find(text).is_some_and(|m| m.start() == 0);
    let text = EMPTY_LINE.replace_all(text, "\n");
    let text = DIV_OPEN.replace_all(&text, "\n");
    let text = DIV_CLOSE.replace_all(&text, "");
    let text = LINE_BREAK.replace_all(&text, "\n");

    if starts_with_div {
        if let Some(rest) = text.strip_prefix('\n') {
            return Cow::Owned(rest.to_string());
        }
    }
    Cow::Owned(text.into_owned())
}
