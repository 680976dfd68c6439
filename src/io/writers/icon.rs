use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::{ConversionCause, Error, Result};
use crate::types::OutputFormat;

/// Encode `icon` losslessly and write it to `output`, replacing any existing file.
pub fn write_icon(output: &Path, icon: &RgbaImage, format: OutputFormat) -> Result<()> {
    let write_err = |source| {
        Error::conversion(ConversionCause::Write {
            path: output.to_path_buf(),
            source,
        })
    };

    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    icon.write_to(&mut writer, format.image_format()).map_err(|source| {
        Error::conversion(ConversionCause::Encode {
            path: output.to_path_buf(),
            source,
        })
    })?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
