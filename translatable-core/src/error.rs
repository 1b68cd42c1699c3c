//! Error types for format and filter operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Errors raised while building a filter pipeline.
///
/// These are configuration errors: they surface when a [`crate::filter::Filter`]
/// or [`crate::filter::FilterList`] is constructed, never when one is applied.
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    /// The pattern of a pattern matcher does not compile
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// A matcher with no text would match between every character
    #[error("Filter matcher must not be empty")]
    EmptyMatcher,
    /// A rule from a configured rule list failed to compile
    #[error("Filter rule #{index} is invalid: {source}")]
    InvalidRule {
        index: usize,
        #[source]
        source: Box<FilterError>,
    },
}
