//! Shared types used across iconpack: output formats, resampling filters and the
//! records returned by the conversion routine.
use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};
use serde::Deserialize;

/// Lossless raster formats an icon can be encoded as.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Tiff,
    Bmp,
}

impl OutputFormat {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Bmp => "bmp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Tiff => write!(f, "TIFF"),
            OutputFormat::Bmp => write!(f, "BMP"),
        }
    }
}

/// Convolution filter used for every resample.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Box,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn to_fast_filter(self) -> fast_image_resize::FilterType {
        match self {
            ResampleFilter::Box => fast_image_resize::FilterType::Box,
            ResampleFilter::Bilinear => fast_image_resize::FilterType::Bilinear,
            ResampleFilter::CatmullRom => fast_image_resize::FilterType::CatmullRom,
            ResampleFilter::Mitchell => fast_image_resize::FilterType::Mitchell,
            ResampleFilter::Lanczos3 => fast_image_resize::FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Box => "Box",
            ResampleFilter::Bilinear => "Bilinear",
            ResampleFilter::CatmullRom => "CatmullRom",
            ResampleFilter::Mitchell => "Mitchell",
            ResampleFilter::Lanczos3 => "Lanczos3",
        };
        write!(f, "{}", s)
    }
}

/// An icon that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub size: u32,
    pub path: PathBuf,
}

impl WrittenFile {
    /// File name component of `path`, for user-facing messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// An icon rendered in memory (no disk I/O)
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub size: u32,
    pub image: RgbaImage,
}

/// File name for an icon of `size` pixels: `icon<size>.<ext>`.
pub fn icon_file_name(size: u32, format: OutputFormat) -> String {
    format!("icon{}.{}", size, format.extension())
}
