//! Decoding and encoding raster images on disk.

use super::RasterImage;
use crate::error::StampError;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Decode an image file into an RGBA [`RasterImage`].
///
/// The format is guessed from the file contents. Sources without an alpha
/// channel get an opaque one.
pub fn load(path: impl AsRef<Path>) -> Result<RasterImage, StampError> {
    let path = path.as_ref();
    let decoded = ImageReader::open(path)
        .map_err(|e| StampError::decode_failed(path, e.to_string()))?
        .with_guessed_format()
        .map_err(|e| StampError::decode_failed(path, e.to_string()))?
        .decode()
        .map_err(|e| StampError::decode_failed(path, e.to_string()))?;

    tracing::trace!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded image"
    );

    Ok(RasterImage::from_rgba_image(decoded.to_rgba8()))
}

/// Encode `image` to `path`, choosing the format from the extension.
///
/// Missing parent directories are created. JPEG output drops the alpha
/// channel.
pub fn save(image: &RasterImage, path: impl AsRef<Path>) -> Result<(), StampError> {
    let path = path.as_ref();
    let format =
        ImageFormat::from_path(path).map_err(|e| StampError::encode_failed(path, e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| StampError::encode_failed(path, e.to_string()))?;
    }

    let rgba = DynamicImage::ImageRgba8(image.to_rgba_image());
    let result = match format {
        ImageFormat::Jpeg => rgba.to_rgb8().save_with_format(path, format),
        _ => rgba.save_with_format(path, format),
    };
    result.map_err(|e| StampError::encode_failed(path, e.to_string()))
}
