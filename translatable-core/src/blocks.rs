//! Block segmentation
//!
//!     A document is edited as a sequence of blocks separated by a blank line. Splitting keeps
//!     every piece between separators, including the empty pieces produced by runs of extra
//!     blank lines, so that rejoining reproduces the document byte for byte. A block index is
//!     positional only; inserting or removing a block renumbers the ones after it.
//!
//!     Whether a document is segmented at all is a configuration choice ([`Segmentation`]),
//!     never something inferred from the content.

/// Separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// How a document is divided for editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Segmentation {
    /// One block per blank-line separated run of text
    #[default]
    Blocks,
    /// The whole document is a single block
    Whole,
}

impl Segmentation {
    /// Map the `blockable` editor flag to a segmentation mode.
    pub fn from_blockable(blockable: bool) -> Self {
        if blockable {
            Segmentation::Blocks
        } else {
            Segmentation::Whole
        }
    }
}

/// Split `markdown` into blocks on [`BLOCK_SEPARATOR`].
///
/// Empty input, or input made of nothing but separators, yields no blocks.
pub fn blocks_from_markdown(markdown: &str) -> Vec<String> {
    let pieces: Vec<&str> = markdown.split(BLOCK_SEPARATOR).collect();
    if pieces.iter().all(|piece| piece.is_empty()) {
        return Vec::new();
    }
    pieces.into_iter().map(str::to_string).collect()
}

/// Join blocks back into a document with [`BLOCK_SEPARATOR`].
pub fn markdown_from_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    let mut markdown = String::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            markdown.push_str(BLOCK_SEPARATOR);
        }
        markdown.push_str(block.as_ref());
    }
    markdown
}

/// Divide `markdown` according to `mode`.
pub fn segment(markdown: &str, mode: Segmentation) -> Vec<String> {
    match mode {
        Segmentation::Blocks => blocks_from_markdown(markdown),
        Segmentation::Whole => vec![markdown.to_string()],
    }
}
