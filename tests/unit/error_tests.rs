// Error reporting tests

use logostamp::error::StampError;
use logostamp::raster::{self, RasterImage};
use logostamp::watermark::{crop, overlay, ContrastScorer, LuminanceEdgeScorer};
use tempfile::TempDir;

#[test]
fn test_missing_file_reports_path() {
    let err = raster::load("/nonexistent/photo.png").unwrap_err();

    assert!(matches!(err, StampError::Decode { .. }));
    assert!(err.to_string().contains("/nonexistent/photo.png"));
    assert!(err.is_data_error());
}

#[test]
fn test_unwritable_output_is_encode_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    // Parent path is a regular file, so the directory cannot be created.
    let err = raster::save(&RasterImage::filled(2, 2, [0, 0, 0, 255]), blocker.join("out.png"))
        .unwrap_err();

    assert!(matches!(err, StampError::Encode { .. }));
    assert!(!err.is_data_error());
}

#[test]
fn test_invalid_parameters_name_the_parameter() {
    let image = RasterImage::filled(10, 10, [0, 0, 0, 255]);

    let err = crop(&image, 5, 0, 5, 10).unwrap_err();
    assert!(matches!(err, StampError::InvalidParameter { .. }));

    let err = overlay(&image, &image, 0, 0, -0.5).unwrap_err();
    assert!(err.to_string().contains("opacity"));
}

#[test]
fn test_insufficient_samples_names_strategy() {
    let logo = RasterImage::filled(6, 6, [200, 200, 200, 255]);
    let background = RasterImage::filled(6, 6, [255, 255, 255, 255]);

    let err = LuminanceEdgeScorer.score(&logo, &background).unwrap_err();

    assert_eq!(
        err,
        StampError::InsufficientSamples {
            strategy: "luminance-edge"
        }
    );
    assert!(err.to_string().contains("luminance-edge"));
}
