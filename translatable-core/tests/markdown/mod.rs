//! Markdown format tests
//!
//! Tests for Markdown → HTML → Markdown round trips and for the registry-level conversions.

mod registry;
mod roundtrip;
