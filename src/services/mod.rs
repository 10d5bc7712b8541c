//! Business logic services
//!
//! - `pattern`: `LIKE` pattern handling shared by the catalog implementations
//! - `document`: Markdown rendering of descriptors
//! - `docgen`: the two-section generation run

pub mod docgen;
pub mod document;
pub mod pattern;

pub use docgen::DocumentGenerator;
pub use document::{compose_document, render, render_function, Section};
