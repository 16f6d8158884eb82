//! PDF renderer for laid-out dossier pages, using lopdf.
//!
//! This crate turns a sequence of [`dossier_layout::Page`]s into PDF bytes. Text
//! is set in the base-14 Type1 faces with WinAnsi encoding, so no fonts are
//! embedded; photos become image XObjects shared across pages.

mod error;
mod images;
mod painter;
mod renderer;
mod writer;

pub use error::RenderError;
pub use images::{EncodedImage, encode_image};
pub use painter::to_win_ansi;
pub use renderer::{LopdfRenderer, ResourceMap};
pub use writer::StreamingPdfWriter;
