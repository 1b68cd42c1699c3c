//! HTML format implementation
//!
//! This module implements bidirectional conversion between the IR and HTML fragments, the
//! markup shown in (and read back from) a rich-text editing surface.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` + `markup5ever` ecosystem for HTML parsing and serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//! - `markup5ever`: Serialization infrastructure
//!
//! This choice is based on:
//! - Complete solution for both parsing and serialization
//! - WHATWG HTML5 specification compliance
//! - Handles malformed HTML gracefully (editors produce a lot of it)
//!
//! # Element Mapping Table
//!
//! | IR Element       | HTML Equivalent                     | Export Notes                      | Import Notes                          |
//! |------------------|-------------------------------------|-----------------------------------|---------------------------------------|
//! | Paragraph        | `<p>`                               | Direct mapping                    | Also any text between blocks          |
//! | Heading          | `<h1>`-`<h6>`                       | Direct mapping                    | Direct mapping                        |
//! | Verbatim         | `<pre><code class="language-x">`    | Language → class                  | Language from `language-` class       |
//! | ThematicBreak    | `<hr>`                              | Direct                            | Direct                                |
//! | Html             | (raw markup)                        | Re-parsed and grafted             | Never produced                        |
//! | InlineContent:   |                                     |                                   |                                       |
//! |   Text           | Text node                           | Escaped by the serializer         | Whitespace collapsed                  |
//! |   Bold           | `<strong>`                          | Semantic strong tag               | Parse both strong and b               |
//! |   Italic         | `<em>`                              | Semantic emphasis tag             | Parse both em and i                   |
//! |   Strikethrough  | `<del>`                             | Direct                            | Parse del, s and strike               |
//! |   Code           | `<code>`                            | Inline code tag                   | Also kbd, samp, tt                    |
//! |   Link           | `<a href title>`                    | Direct                            | Anchors without href → text           |
//! |   Image          | `<img src alt title>`               | Direct                            | Missing src → alt text                |
//! |   LineBreak      | `<br>`                              | Direct                            | Direct                                |
//!
//! # Lossy Conversions
//!
//! - Container elements (`div`, lists, tables, block quotes) are flattened to paragraphs
//! - Unknown elements keep only their text content
//! - `script`, `style`, `template` and comments are dropped
//! - Attributes other than the ones listed above (e.g. `width`) are dropped

mod dom;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for HTML fragments
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment as shown in a rich-text editor"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_html(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_html(doc)
    }
}
