use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{ConversionCause, Error, Result};
use crate::io::SourceImage;
use crate::types::ResampleFilter;

/// Resample an RGBA8 image to exactly `target_width` x `target_height`.
///
/// Aspect ratio is not preserved. An image already at the requested size is
/// returned as-is.
pub fn resize_rgba_image(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    if (width, height) == (target_width, target_height) {
        debug!("Already {}x{}, skipping resample", width, height);
        return Ok(src.clone());
    }

    debug!(
        "Resampling {}x{} -> {}x{} ({})",
        width, height, target_width, target_height, filter
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter.to_fast_filter()));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, src.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::conversion(ConversionCause::BufferMismatch {
            width: target_width,
            height: target_height,
        })
    })
}

/// Force the source to a square of side `min(width, height)` by resampling.
///
/// Non-square sources are squeezed along their long axis, not cropped.
pub fn normalize_to_square(source: &SourceImage, filter: ResampleFilter) -> Result<RgbaImage> {
    let side = source.square_side();
    resize_rgba_image(&source.pixels, side, side, filter)
}
