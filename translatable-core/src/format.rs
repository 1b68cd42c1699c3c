//! The `Format` trait
//!
//! A format maps between its text syntax and the IR [`Document`]. The crate ships two:
//! [`MarkdownFormat`](crate::formats::MarkdownFormat) (what translators write) and
//! [`HtmlFormat`](crate::formats::HtmlFormat) (what the preview surface renders and edits).
//! Both directions are optional so a format can be read-only or write-only; the
//! [`FormatRegistry`](crate::registry::FormatRegistry) checks the capability flags before
//! dispatching.

use crate::error::FormatError;
use crate::ir::nodes::Document;

pub trait Format: Send + Sync {
    /// Registry key, e.g. `"markdown"`
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Extensions without the leading dot, used to pick a format for a path
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether `extension` (no dot, any case) belongs to this format.
    fn matches_extension(&self, extension: &str) -> bool {
        self.file_extensions()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Text → IR
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "{} input is not supported",
            self.name()
        )))
    }

    /// IR → text
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "{} output is not supported",
            self.name()
        )))
    }
}
