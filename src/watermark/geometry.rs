//! Scale, pad and crop operations on raster buffers.

use crate::error::StampError;
use crate::raster::RasterImage;
use fast_image_resize::{FilterType, Image, PixelType, ResizeAlg, Resizer};
use std::num::NonZeroU32;

/// Resize by `factor` with linear interpolation.
///
/// Output dimensions are `round(width * factor)` x `round(height * factor)`.
/// Fails when the factor is not a positive finite number or the result would
/// have a zero dimension.
pub fn scale(image: &RasterImage, factor: f32) -> Result<RasterImage, StampError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(StampError::invalid_param(
            "factor",
            format!("scale factor must be > 0, got {}", factor),
        ));
    }

    let target_w = (image.width() as f64 * factor as f64).round() as u32;
    let target_h = (image.height() as f64 * factor as f64).round() as u32;
    resize(image, target_w, target_h)
}

/// Scale uniformly so the result is `target_width` pixels wide.
pub fn scale_to_width(image: &RasterImage, target_width: u32) -> Result<RasterImage, StampError> {
    if image.width() == 0 {
        return Err(StampError::invalid_param("width", "source width is 0"));
    }
    let factor = target_width as f32 / image.width() as f32;
    scale(image, factor)
}

fn resize(image: &RasterImage, target_w: u32, target_h: u32) -> Result<RasterImage, StampError> {
    if (target_w, target_h) == image.dimensions() {
        return Ok(image.clone());
    }

    let src_width = NonZeroU32::new(image.width())
        .ok_or_else(|| StampError::invalid_param("width", "source width is 0"))?;
    let src_height = NonZeroU32::new(image.height())
        .ok_or_else(|| StampError::invalid_param("height", "source height is 0"))?;
    let dst_width = NonZeroU32::new(target_w)
        .ok_or_else(|| StampError::invalid_param("factor", "target width rounds to 0"))?;
    let dst_height = NonZeroU32::new(target_h)
        .ok_or_else(|| StampError::invalid_param("factor", "target height rounds to 0"))?;

    let pixel_type = if image.has_alpha() {
        PixelType::U8x4
    } else {
        PixelType::U8x3
    };

    let src_image = Image::from_vec_u8(src_width, src_height, image.data().to_vec(), pixel_type)
        .map_err(|e| {
            StampError::invalid_param("image", format!("unusable source buffer: {:?}", e))
        })?;
    let mut dst_image = Image::new(dst_width, dst_height, pixel_type);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Bilinear));
    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| StampError::invalid_param("image", format!("resize failed: {:?}", e)))?;

    RasterImage::from_raw(target_w, target_h, image.channels(), dst_image.into_vec())
}

/// Grow the canvas with a zero-filled (transparent black) border. The
/// original content lands at (left, top).
pub fn pad(
    image: &RasterImage,
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
) -> Result<RasterImage, StampError> {
    let width = image
        .width()
        .checked_add(left)
        .and_then(|w| w.checked_add(right))
        .ok_or_else(|| StampError::invalid_param("pad", "padded width overflows"))?;
    let height = image
        .height()
        .checked_add(top)
        .and_then(|h| h.checked_add(bottom))
        .ok_or_else(|| StampError::invalid_param("pad", "padded height overflows"))?;

    let mut out = RasterImage::new(width, height, image.channels())?;
    let channels = image.channels() as usize;
    let row_len = image.width() as usize * channels;
    if row_len == 0 {
        return Ok(out);
    }
    for (y, src) in image.data().chunks_exact(row_len).enumerate() {
        let dst_start = ((top as usize + y) * width as usize + left as usize) * channels;
        out.data_mut()[dst_start..dst_start + row_len].copy_from_slice(src);
    }
    Ok(out)
}

/// Extract the rectangle [x1, x2) x [y1, y2).
pub fn crop(
    image: &RasterImage,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
) -> Result<RasterImage, StampError> {
    if x1 >= x2 || x2 > image.width() || y1 >= y2 || y2 > image.height() {
        return Err(StampError::invalid_param(
            "crop",
            format!(
                "rectangle ({}, {})-({}, {}) is empty or outside {}x{}",
                x1,
                y1,
                x2,
                y2,
                image.width(),
                image.height()
            ),
        ));
    }

    let channels = image.channels() as usize;
    let src_row_len = image.width() as usize * channels;
    let row_len = (x2 - x1) as usize * channels;
    let mut data = Vec::with_capacity(row_len * (y2 - y1) as usize);
    for y in y1..y2 {
        let start = y as usize * src_row_len + x1 as usize * channels;
        data.extend_from_slice(&image.data()[start..start + row_len]);
    }

    RasterImage::from_raw(x2 - x1, y2 - y1, image.channels(), data)
}
