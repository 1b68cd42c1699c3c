//! Conversions through the format registry, which reports errors instead of degrading.

use translatable_core::{FormatError, FormatRegistry};

#[test]
fn test_convert_between_registered_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry
            .convert("Some **bold** text", "markdown", "html")
            .unwrap(),
        "<p>Some <strong>bold</strong> text</p>"
    );
    assert_eq!(
        registry
            .convert("<p>Some <em>text</em></p>", "html", "markdown")
            .unwrap(),
        "Some *text*"
    );
}

#[test]
fn test_unknown_format_is_an_error() {
    let registry = FormatRegistry::default();
    let err = registry.convert("x", "markdown", "pdf").unwrap_err();
    assert_eq!(err, FormatError::FormatNotFound("pdf".to_string()));
    assert_eq!(err.to_string(), "Format 'pdf' not found");
}

#[test]
fn test_detect_format_then_convert() {
    let registry = FormatRegistry::default();
    let from = registry.detect_format_from_filename("chapter/01.md").unwrap();
    assert_eq!(
        registry.convert("# 01", &from, "html").unwrap(),
        "<h1>01</h1>"
    );
}
