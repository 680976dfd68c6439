use std::fs;

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::IconConfig;
use crate::core::processing::resize::{normalize_to_square, resize_rgba_image};
use crate::error::Result;
use crate::io::load_source;
use crate::io::writers::write_icon;
use crate::types::{RenderedIcon, WrittenFile};

/// Load the configured source and resample it to the normalized square.
fn load_normalized(config: &IconConfig) -> Result<RgbaImage> {
    config.validate()?;
    let source = load_source(&config.source)?;
    info!(
        "Normalizing {}x{} source to {}x{}",
        source.width,
        source.height,
        source.square_side(),
        source.square_side()
    );
    normalize_to_square(&source, config.filter)
}

/// Run the whole conversion: load, normalize, then resample and write each size in
/// configured order. Stops at the first failure; icons already written stay on disk.
///
/// `on_written` is called once per icon, right after its file has been written.
pub fn run_conversion<F>(config: &IconConfig, mut on_written: F) -> Result<Vec<WrittenFile>>
where
    F: FnMut(&WrittenFile),
{
    let square = load_normalized(config)?;
    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = resize_rgba_image(&square, size, size, config.filter)?;
        let path = config.output_path(size);
        write_icon(&path, &icon, config.format)?;
        debug!("Wrote {:?} ({}x{}, {})", path, size, size, config.format);

        let file = WrittenFile { size, path };
        on_written(&file);
        written.push(file);
    }

    info!("Generated {} icons in {:?}", written.len(), config.output_dir);
    Ok(written)
}

/// Same as [`run_conversion`] but keeps the icons in memory instead of writing them.
pub fn render_in_memory(config: &IconConfig) -> Result<Vec<RenderedIcon>> {
    let square = load_normalized(config)?;
    config
        .sizes
        .iter()
        .map(|&size| -> Result<RenderedIcon> {
            Ok(RenderedIcon {
                size,
                image: resize_rgba_image(&square, size, size, config.filter)?,
            })
        })
        .collect()
}
