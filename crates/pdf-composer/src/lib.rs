//! PDF post-processing on an already rendered document.
//!
//! This crate works on serialized bytes through `lopdf::Document`. It never
//! touches page content; it only rewrites document-level structures.

mod error;
mod metadata;

pub use error::ComposerError;
pub use metadata::{DocumentMetadata, apply_metadata, read_metadata};
