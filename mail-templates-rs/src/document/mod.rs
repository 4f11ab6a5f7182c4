//! Data-driven email documents
//!
//! Models a template as a tree of typed nodes with separate inline style
//! maps, plus a serializer that emits the final self-contained HTML string
//! and substitutes placeholder tokens along the way.

pub mod html;
pub mod types;

pub use html::render_document;
pub use types::{Document, Node, Style};
