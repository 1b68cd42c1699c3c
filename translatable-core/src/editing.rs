//! Block editing flow.
//!
//! A block is shown either as rendered HTML (the preview surface) or as display-encoded raw
//! Markdown (the raw surface). Edits coming back from either surface are turned into Markdown
//! again and committed only when they change what the block renders to.

use crate::display::{from_display, to_display};
use crate::filter::FilterList;
use crate::script::{classify, is_hebrew, ScriptClass};
use crate::transforms::{html_to_markdown, markdown_to_html};

/// Filters applied around the conversions of one editor.
#[derive(Debug, Clone, Default)]
pub struct EditPipeline {
    /// Applied to Markdown before it is rendered
    pub input: FilterList,
    /// Applied to Markdown produced from an edit
    pub output: FilterList,
}

/// How a block should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub direction: ScriptClass,
    pub enlarge_text: bool,
}

impl EditPipeline {
    pub fn new(input: FilterList, output: FilterList) -> Self {
        Self { input, output }
    }

    /// HTML for the preview surface.
    pub fn preview_html(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.input)
    }

    /// Display-encoded Markdown for the raw surface.
    pub fn raw_display(&self, markdown: &str) -> String {
        to_display(markdown)
    }

    /// Markdown for HTML edited on the preview surface, or `None` if the edit changes nothing.
    pub fn commit_html(&self, current: &str, edited_html: &str) -> Option<String> {
        let markdown = html_to_markdown(edited_html, &self.output);
        self.changed(current, markdown)
    }

    /// Markdown for text edited on the raw surface, or `None` if the edit changes nothing.
    pub fn commit_raw(&self, current: &str, edited_display: &str) -> Option<String> {
        let markdown = self.output.apply(&from_display(edited_display));
        self.changed(current, markdown)
    }

    /// Direction and sizing for `markdown`.
    pub fn presentation(&self, markdown: &str) -> Presentation {
        Presentation {
            direction: classify(markdown),
            enlarge_text: is_hebrew(markdown),
        }
    }

    // Compared on rendered output: `_a_` and `*a*` are the same block.
    fn changed(&self, current: &str, markdown: String) -> Option<String> {
        if self.preview_html(&markdown) == self.preview_html(current) {
            log::trace!("Edit renders identically, ignoring");
            None
        } else {
            Some(markdown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn test_preview_and_raw_surfaces() {
        let pipeline = EditPipeline::default();
        assert_eq!(pipeline.preview_html("*hi*"), "<p><em>hi</em></p>");
        assert_eq!(pipeline.raw_display("a <b> & c"), "a &lt;b&gt; &amp; c");
    }

    #[test]
    fn test_commit_html_detects_changes() {
        let pipeline = EditPipeline::default();
        assert_eq!(
            pipeline.commit_html("Hello", "<p>Hello <b>there</b></p>"),
            Some("Hello **there**".to_string())
        );
    }

    #[test]
    fn test_commit_html_ignores_formatting_only_edits() {
        let pipeline = EditPipeline::default();
        assert_eq!(pipeline.commit_html("_hi_", "<p><em>hi</em></p>"), None);
    }

    #[test]
    fn test_commit_raw_decodes_and_filters() {
        let pipeline = EditPipeline::new(
            FilterList::default(),
            FilterList::new().with(Filter::literal("teh", "the").unwrap()),
        );
        assert_eq!(
            pipeline.commit_raw("old", "teh &lt;end&gt;<div>next</div>"),
            Some("the <end>\nnext".to_string())
        );
        assert_eq!(pipeline.commit_raw("same", "same"), None);
    }

    #[test]
    fn test_presentation_follows_script() {
        let pipeline = EditPipeline::default();
        assert_eq!(
            pipeline.presentation("בְּרֵאשִׁית"),
            Presentation {
                direction: ScriptClass::Rtl,
                enlarge_text: true,
            }
        );
        assert_eq!(
            pipeline.presentation("مرحبا"),
            Presentation {
                direction: ScriptClass::Rtl,
                enlarge_text: false,
            }
        );
        assert_eq!(
            pipeline.presentation("hello"),
            Presentation {
                direction: ScriptClass::Ltr,
                enlarge_text: false,
            }
        );
    }
}
