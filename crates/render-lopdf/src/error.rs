use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported image format {0:?}; only JPEG and PNG are embedded")]
    UnsupportedImage(image::ImageFormat),

    #[error("{0}")]
    Other(String),
}
