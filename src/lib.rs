//! Composition and template rendering for job application documents.
//!
//! An [`ApplicationRecord`] plus a [`LayoutConfig`] go in; a print-ready PDF
//! with an optional cover page, an optional DIN 5008 cover letter and a CV in
//! one of six templates comes out. Every render is an independent, pure
//! computation over borrowed input.
//!
//! ```no_run
//! use dossier::{ApplicationRecord, DocumentGenerator, DocumentSelection, LayoutConfig};
//!
//! let record: ApplicationRecord = serde_json::from_str("{}")?;
//! let layout = LayoutConfig::default().with_template("sidebar");
//! let pdf = DocumentGenerator::new().generate(&record, &layout, &DocumentSelection::cv_only())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod generator;
pub mod locale;
pub mod metadata;
pub mod model;
pub mod sections;
pub mod style;
pub mod templates;

pub use config::{DocumentSelection, HeaderStyle, LayoutConfig, PhotoPosition, TemplateId};
pub use error::PipelineError;
pub use generator::{DocumentGenerator, GeneratorBuilder, PHOTO_KEY, RenderRequest};
pub use locale::Locale;
pub use model::ApplicationRecord;
pub use style::ResolvedStyle;
pub use templates::TemplateKind;

pub use dossier_layout::Page;
pub use dossier_pdf_composer::{DocumentMetadata, read_metadata};
