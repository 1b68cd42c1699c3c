//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the IR and Markdown.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing:
//! - CommonMark compliant block and inline parsing
//! - Robust and well-maintained
//! - Supports extensions (strikethrough)
//!
//! Serialization is a direct walk over the IR rather than comrak's CommonMark formatter: the
//! output has to stay as close as possible to what a person typed (no hard wrapping, no
//! rewritten list markers, inline siblings kept on one line).
//!
//! # Element Mapping Table
//!
//! | IR Element       | Markdown Equivalent     | Export Notes                           | Import Notes                          |
//! |------------------|-------------------------|----------------------------------------|---------------------------------------|
//! | Paragraph        | Paragraph               | Direct mapping                         | Direct mapping                        |
//! | Heading          | Heading (# ## ###)      | Always ATX                             | ATX and setext                        |
//! | Verbatim         | Code block (```)        | Language → info string                 | Fenced and indented                   |
//! | ThematicBreak    | `---`                   | Direct                                 | Direct                                |
//! | Html             | Raw HTML block          | Emitted untouched                      | Kept untouched                        |
//! | InlineContent:   |                         |                                        |                                       |
//! |   Text           | Plain text              | Escaped where it would read as markup  | Direct                                |
//! |   Bold           | **bold**                | Use **                                 | Parse both                            |
//! |   Italic         | *italic*                | Use *                                  | Parse both                            |
//! |   Strikethrough  | ~~strike~~              | Direct                                 | Extension enabled                     |
//! |   Code           | `code`                  | Fence grows with inner backticks       | Direct                                |
//! |   Link           | [text](url "title")     | Direct                                 | Direct                                |
//! |   Image          | ![alt](src "title")     | Direct                                 | Alt flattened to text                 |
//! |   LineBreak      | newline                 | Single `\n`                            | Soft and hard breaks                  |
//!
//! # Lossy Conversions
//!
//! - Lists, block quotes and tables are flattened to their paragraphs
//! - Setext headings come back as ATX headings
//! - Hard breaks (`  \n`, `\\\n`) come back as plain newlines

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown (paragraphs, headings, images, basic inline markup)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
