//! Crate-level error type and `Result` alias.
//!
//! The conversion routine reports exactly two kinds of failure: the source image is
//! missing, or something after the open went wrong. `InvalidConfig` is only produced
//! by the JSON configuration helpers.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("conversion failed: {0}")]
    ConversionFailed(#[from] ConversionCause),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Underlying cause of a [`Error::ConversionFailed`].
#[derive(Debug, Error)]
pub enum ConversionCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel buffer rejected: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("resize failed: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("resized buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },

    #[error("invalid target size: {size}")]
    InvalidSize { size: u32 },

    #[error("no target sizes configured")]
    NoSizes,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    SourceNotFound,
    ConversionFailed,
    InvalidConfig,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Error::ConversionFailed(_) => ErrorKind::ConversionFailed,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Wrap any lower-level failure as a conversion failure.
    pub fn conversion<E: Into<ConversionCause>>(e: E) -> Self {
        Error::ConversionFailed(e.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::conversion(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::conversion(e)
    }
}

impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Error::conversion(e)
    }
}

impl From<fast_image_resize::ResizeError> for Error {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Error::conversion(e)
    }
}
