//! Intermediate Representation (IR)
//!
//! Both formats convert through this tree: Markdown and HTML are parsed into an
//! [`nodes::Document`] and serialized back from one, so each format only needs to know how
//! to map its own syntax tree to and from the IR.

pub mod nodes;
