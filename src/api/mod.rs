//! High-level, ergonomic library API: convert a logo into icon files on disk or into
//! in-memory buffers. Prefer these entrypoints over the low-level processing modules.
use std::path::Path;

use crate::core::params::IconConfig;
use crate::core::processing::pipeline::{render_in_memory, run_conversion};
use crate::error::Result;
use crate::types::{RenderedIcon, WrittenFile};

/// Convert `source` into `icon16/32/48/128.png` in the working directory.
pub fn convert(source: &Path) -> Result<Vec<WrittenFile>> {
    convert_with_config(&IconConfig::with_source(source), |_| {})
}

/// Convert with explicit parameters, calling `on_written` after each icon is saved.
pub fn convert_with_config<F>(config: &IconConfig, on_written: F) -> Result<Vec<WrittenFile>>
where
    F: FnMut(&WrittenFile),
{
    run_conversion(config, on_written)
}

/// Produce every configured icon in memory (no disk I/O)
pub fn render_icons(config: &IconConfig) -> Result<Vec<RenderedIcon>> {
    render_in_memory(config)
}
