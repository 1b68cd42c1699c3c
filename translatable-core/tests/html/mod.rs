//! HTML format tests
//!
//! Tests for HTML → Markdown (import) and Markdown → HTML (export).

mod export;
mod import;
