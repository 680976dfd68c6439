use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConversionCause, Error, Result};
use crate::types::{OutputFormat, ResampleFilter, icon_file_name};

/// Source image looked up in the working directory when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "logo.png";

/// Icon sizes a browser extension package expects, ascending.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Conversion parameters suitable for config files and tests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Square side of each emitted icon, written in this order
    pub sizes: Vec<u32>,
    pub format: OutputFormat,
    pub filter: ResampleFilter,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            format: OutputFormat::Png,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl IconConfig {
    /// Default configuration reading `source` and writing next to the working directory.
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(serde_json::Error::io)?;
        Self::from_json_str(&text)
    }

    /// Path the icon of `size` pixels is written to.
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size, self.format))
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::conversion(ConversionCause::NoSizes));
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(Error::conversion(ConversionCause::InvalidSize { size }));
        }
        Ok(())
    }
}
