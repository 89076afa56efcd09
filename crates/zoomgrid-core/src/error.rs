use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoomgridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image size '{0}' (expected WIDTHxHEIGHT, both > 0)")]
    InvalidSize(String),

    #[error("Invalid grid interval '{0}' (expected a positive integer)")]
    InvalidGridInterval(String),

    #[error("No overlay loaded")]
    NoOverlay,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ZoomgridError>;
