//! Original/translation pairing for one section of a document.

use crate::blocks::{markdown_from_blocks, segment, Segmentation, BLOCK_SEPARATOR};

/// One row of a side-by-side view: the original block and its translation at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPair<'a> {
    pub index: usize,
    pub original: Option<&'a str>,
    pub translation: Option<&'a str>,
}

/// A section's original text and its translation, both segmented the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    original: Vec<String>,
    translation: Vec<String>,
}

impl Section {
    pub fn new(original: &str, translation: &str, mode: Segmentation) -> Self {
        Self {
            original: segment(original, mode),
            translation: segment(translation, mode),
        }
    }

    /// Pair blocks by position, up to the longer of the two documents.
    pub fn pairs(&self) -> Vec<BlockPair<'_>> {
        let len = self.original.len().max(self.translation.len());
        (0..len)
            .map(|index| BlockPair {
                index,
                original: self.original.get(index).map(String::as_str),
                translation: self.translation.get(index).map(String::as_str),
            })
            .collect()
    }

    pub fn original_blocks(&self) -> &[String] {
        &self.original
    }

    pub fn translation_blocks(&self) -> &[String] {
        &self.translation
    }

    /// Replace translation block `index` and return the rejoined translation.
    ///
    /// Missing blocks before `index` are filled with empty ones.
    pub fn set_translation_block(&mut self, index: usize, text: impl Into<String>) -> String {
        if index >= self.translation.len() {
            self.translation.resize(index + 1, String::new());
        }
        self.translation[index] = text.into();
        self.translation()
    }

    pub fn translation(&self) -> String {
        markdown_from_blocks(&self.translation)
    }

    /// First paragraph of the original, or of the translation when the original has none.
    pub fn title(&self) -> Option<&str> {
        first_paragraph(&self.original).or_else(|| first_paragraph(&self.translation))
    }
}

fn first_paragraph(blocks: &[String]) -> Option<&str> {
    let first = blocks.first()?;
    let paragraph = first.split(BLOCK_SEPARATOR).next().unwrap_or(first);
    (!paragraph.trim().is_empty()).then_some(paragraph)
}
