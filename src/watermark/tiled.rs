//! Repeating checkerboard watermark over the whole image.
//!
//! The image is padded by one logo size on every side so tiles near the
//! edges stay in bounds, tiles are drawn on the odd cells of the grid, and
//! the padding is cropped away again. The output always has the input's
//! dimensions.

use super::compositor::overlay_onto;
use super::config::WatermarkConfig;
use super::geometry::{crop, pad, scale};
use super::position::{calculate_tiled_positions, ImageDimensions, LogoDimensions};
use crate::error::StampError;
use crate::raster::{self, RasterImage};
use std::path::Path;

/// Tile an already scaled `logo` over `image`.
pub fn tile_watermark(
    image: &RasterImage,
    logo: &RasterImage,
    config: &WatermarkConfig,
) -> Result<RasterImage, StampError> {
    let (logo_w, logo_h) = logo.dimensions();
    let mut canvas = pad(image, logo_w, logo_w, logo_h, logo_h)?;
    let (canvas_w, canvas_h) = canvas.dimensions();

    let tiles = calculate_tiled_positions(
        &ImageDimensions {
            width: canvas_w,
            height: canvas_h,
        },
        &LogoDimensions {
            width: logo_w,
            height: logo_h,
        },
        config.spacing,
        config.offset_x,
        config.offset_y,
    )?;

    for tile in &tiles {
        overlay_onto(
            &mut canvas,
            logo,
            tile.position.x,
            tile.position.y,
            config.opacity,
        )?;
    }
    tracing::trace!(
        tiles = tiles.len(),
        logo_width = logo_w,
        logo_height = logo_h,
        "Composited watermark tiles"
    );

    crop(&canvas, logo_w, logo_h, canvas_w - logo_w, canvas_h - logo_h)
}

/// Load `image_path` and `logo_path`, scale the logo by
/// `config.logo_scale`, and tile it over the image.
pub fn embed_tiled_watermark(
    image_path: impl AsRef<Path>,
    logo_path: impl AsRef<Path>,
    config: &WatermarkConfig,
) -> Result<RasterImage, StampError> {
    let image = raster::load(image_path)?;
    let logo = scale(&raster::load(logo_path)?, config.logo_scale)?;
    tile_watermark(&image, &logo, config)
}
