//! Alpha compositing of a logo onto a canvas.
//!
//! # Features
//!
//! - Porter-Duff "over" with an opacity factor pre-scaling the foreground alpha
//! - Strict placement bounds: a foreground that does not fit is an error, never
//!   silently clipped (pad the canvas first)
//! - [`overlay`] returns a new buffer; [`overlay_onto`] blends into a canvas
//!   the caller owns
//!
//! # Example
//!
//! ```ignore
//! use logostamp::watermark::compositor::overlay;
//!
//! let stamped = overlay(&photo, &logo, 10, 10, 0.5)?;
//! ```

use crate::error::StampError;
use crate::raster::RasterImage;

/// Composite `foreground` onto a copy of `background` with its top-left
/// corner at (x, y).
///
/// `opacity` in [0, 1] scales the foreground's own per-pixel alpha. Pixels
/// outside the foreground rectangle are copied unchanged.
pub fn overlay(
    background: &RasterImage,
    foreground: &RasterImage,
    x: u32,
    y: u32,
    opacity: f32,
) -> Result<RasterImage, StampError> {
    check_opacity(opacity)?;
    check_fits(background, foreground, x, y)?;

    let mut out = background.clone();
    blend_region(&mut out, foreground, x, y, opacity);
    Ok(out)
}

/// In-place form of [`overlay`] for a canvas the caller owns exclusively.
pub fn overlay_onto(
    canvas: &mut RasterImage,
    foreground: &RasterImage,
    x: u32,
    y: u32,
    opacity: f32,
) -> Result<(), StampError> {
    check_opacity(opacity)?;
    check_fits(canvas, foreground, x, y)?;
    blend_region(canvas, foreground, x, y, opacity);
    Ok(())
}

fn blend_region(canvas: &mut RasterImage, foreground: &RasterImage, x: u32, y: u32, opacity: f32) {
    // Zero opacity leaves every pixel untouched, even on translucent canvases.
    if opacity == 0.0 {
        return;
    }

    for fy in 0..foreground.height() {
        for fx in 0..foreground.width() {
            let fg = foreground.pixel(fx, fy);
            let fg_alpha = foreground.alpha(fx, fy);
            let (tx, ty) = (x + fx, y + fy);
            let bg_alpha = canvas.alpha(tx, ty);
            blend_pixel(canvas.pixel_mut(tx, ty), bg_alpha, fg, fg_alpha, opacity);
        }
    }
}

/// Render the logo on its own over a transparent black canvas of the same
/// size. Fully transparent logo areas come out pure black.
pub fn render_alone(logo: &RasterImage) -> Result<RasterImage, StampError> {
    let canvas = RasterImage::new(logo.width(), logo.height(), 4)?;
    overlay(&canvas, logo, 0, 0, 1.0)
}

fn check_opacity(opacity: f32) -> Result<(), StampError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(StampError::invalid_param(
            "opacity",
            format!("{} is outside [0, 1]", opacity),
        ))
    }
}

fn check_fits(
    background: &RasterImage,
    foreground: &RasterImage,
    x: u32,
    y: u32,
) -> Result<(), StampError> {
    let right = x as u64 + foreground.width() as u64;
    let bottom = y as u64 + foreground.height() as u64;
    if right > background.width() as u64 || bottom > background.height() as u64 {
        return Err(StampError::invalid_param(
            "placement",
            format!(
                "{}x{} foreground at ({}, {}) exceeds {}x{} background",
                foreground.width(),
                foreground.height(),
                x,
                y,
                background.width(),
                background.height()
            ),
        ));
    }
    Ok(())
}

/// Blend one foreground pixel into `target` in place.
///
/// out_color = a_fg * fg + a_bg * bg * (1 - a_fg)
/// out_alpha = 1 - (1 - a_fg) * (1 - a_bg)
fn blend_pixel(target: &mut [u8], bg_alpha: u8, fg: &[u8], fg_alpha: u8, opacity: f32) {
    let a_fg = (fg_alpha as f32 / 255.0) * opacity;
    let a_bg = bg_alpha as f32 / 255.0;

    for c in 0..3 {
        let value = a_fg * fg[c] as f32 + a_bg * target[c] as f32 * (1.0 - a_fg);
        target[c] = value.clamp(0.0, 255.0) as u8;
    }

    if target.len() == 4 {
        let out_alpha = 1.0 - (1.0 - a_fg) * (1.0 - a_bg);
        target[3] = (out_alpha * 255.0).clamp(0.0, 255.0) as u8;
    }
}
