use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// A decoded source bitmap, always RGBA8.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub pixels: RgbaImage,
}

impl SourceImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Side of the square the source is normalized to.
    pub fn square_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Open and decode the source image at `path`.
///
/// A missing file is reported as [`Error::SourceNotFound`]; anything else that goes
/// wrong while reading or decoding is a conversion failure.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    debug!("Opening source image {:?}", path);
    let reader = match ImageReader::open(path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let decoded = reader.with_guessed_format()?.decode()?;

    let source = SourceImage::from_rgba(decoded.into_rgba8());
    info!("Loaded {:?}: {}x{}", path, source.width, source.height);
    Ok(source)
}
