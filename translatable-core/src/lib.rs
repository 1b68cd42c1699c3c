//! Conversion core for translatable Markdown documents
//!
//!     This crate powers an editor where a translator works on a Markdown document block by
//!     block. Each block is shown either as rendered HTML (edited in a rich-text surface) or as
//!     raw Markdown (edited in a plain surface), and every edit comes back as Markdown.
//!
//!     This is a pure lib: no code here supposes a shell environment, be it std print, env
//!     vars or a locale read from the system. Everything it needs (filters, segmentation mode,
//!     string tables) is passed in. The conversion functions never fail; they degrade.
//!
//! Architecture
//!
//!     Markdown and HTML are both formats (see ./format.rs) converting to and from a small
//!     Intermediate Representation (./ir). Each format relies on its own library for parsing
//!     (comrak for Markdown, html5ever for HTML) and maps that library's tree to the IR, so
//!     the conversion logic stays focused on the mapping, not on parsing.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── ir                      # Intermediate Representation
//!     ├── transforms.rs           # Infallible Markdown ⇄ HTML entry points
//!     ├── filter.rs               # Ordered find/replace rules
//!     ├── blocks.rs               # Block segmentation
//!     ├── display.rs              # Raw-surface display codec
//!     ├── script.rs               # Script / direction detection
//!     ├── editing.rs              # Preview/raw editing flow
//!     ├── section.rs              # Original/translation pairing
//!     └── strings.rs              # Localized UI strings
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     └── <format>
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod blocks;
pub mod display;
pub mod editing;
pub mod error;
pub mod filter;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod script;
pub mod section;
pub mod strings;
pub mod transforms;

pub use blocks::{blocks_from_markdown, markdown_from_blocks, segment, Segmentation};
pub use display::{from_display, to_display};
pub use editing::{EditPipeline, Presentation};
pub use error::{FilterError, FormatError};
pub use filter::{apply as filter, Filter, FilterList, FilterRule, MatcherKind};
pub use format::Format;
pub use registry::FormatRegistry;
pub use script::{classify, is_hebrew, ScriptClass};
pub use section::{BlockPair, Section};
pub use strings::StringTable;
pub use transforms::{html_to_markdown, markdown_to_html};
