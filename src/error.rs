use dossier_render_lopdf::RenderError;
use thiserror::Error;

/// The error type for the document generation pipeline.
///
/// Sparse or missing input data is never an error; only a structurally
/// invalid configuration or a failure to produce bytes ends a render.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Unknown template identifier '{0}' (expected one of: plain, banded, sidebar, stack-first, understated, dense)")]
    UnknownTemplate(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
