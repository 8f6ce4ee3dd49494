// Batch runner and CLI integration tests

use super::test_harness::Workspace;
use logostamp::batch::{run_batch, BatchError, BatchSummary, SilentProgress};
use logostamp::config::Mode;
use logostamp::raster::{self, RasterImage};
use std::process::Command;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn populated_workspace() -> Workspace {
    let ws = Workspace::new().with_logos();
    ws.add_image("a.png", &RasterImage::filled(300, 200, WHITE));
    ws.add_image("2024/b.JPG", &RasterImage::filled(320, 240, [20, 40, 60, 255]));
    ws.add_image("2024/trip/c.jpeg", &RasterImage::filled(256, 256, WHITE));
    std::fs::write(ws.input_dir().join("notes.txt"), "not an image").unwrap();
    ws
}

#[test]
fn test_batch_mirrors_input_tree() {
    let ws = populated_workspace();
    let config = ws.config(Mode::BestPlacement);

    let summary = run_batch(&config, &SilentProgress).unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            discovered: 3,
            processed: 3,
            skipped: 0,
            failed: 0,
        }
    );
    for (relative, dims) in [
        ("a.png", (300, 200)),
        ("2024/b.JPG", (320, 240)),
        ("2024/trip/c.jpeg", (256, 256)),
    ] {
        let out = raster::load(ws.output_dir().join(relative)).unwrap();
        assert_eq!(out.dimensions(), dims, "{}", relative);
    }
    assert!(!ws.output_dir().join("notes.txt").exists());
}

#[test]
fn test_second_run_skips_everything_and_leaves_outputs_alone() {
    let ws = populated_workspace();
    let config = ws.config(Mode::BestPlacement);
    run_batch(&config, &SilentProgress).unwrap();

    let output = ws.output_dir().join("a.png");
    let before = std::fs::metadata(&output).unwrap().modified().unwrap();

    let summary = run_batch(&config, &SilentProgress).unwrap();

    assert_eq!(summary.processed, 0);
    assert_eq!(summary.skipped, 3);
    let after = std::fs::metadata(&output).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_tiled_batch_in_parallel() {
    let ws = populated_workspace();
    let mut config = ws.config(Mode::Tiled);
    config.batch.parallel = true;

    let summary = run_batch(&config, &SilentProgress).unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.failed, 0);
}

#[test]
fn test_missing_logo_is_fatal() {
    let ws = Workspace::new();
    ws.add_image("a.png", &RasterImage::filled(300, 200, WHITE));
    let config = ws.config(Mode::BestPlacement);

    let err = run_batch(&config, &SilentProgress).unwrap_err();

    assert!(matches!(err, BatchError::Logo(_)));
    assert!(!ws.output_dir().exists());
}

#[test]
fn test_cli_check_accepts_valid_config() {
    let ws = populated_workspace();
    let config_path = ws.write_config(&ws.config(Mode::BestPlacement));

    let status = Command::new(env!("CARGO_BIN_EXE_logostamp"))
        .arg("--config")
        .arg(&config_path)
        .arg("--check")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!ws.output_dir().exists());
}

#[test]
fn test_cli_rejects_invalid_config() {
    let ws = populated_workspace();
    let mut config = ws.config(Mode::Tiled);
    config.tiled.opacity = 3.0;
    let config_path = ws.write_config(&config);

    let status = Command::new(env!("CARGO_BIN_EXE_logostamp"))
        .arg("--config")
        .arg(&config_path)
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn test_cli_runs_batch_and_tolerates_bad_images() {
    let ws = populated_workspace();
    std::fs::write(ws.input_dir().join("broken.png"), b"garbage").unwrap();
    let config_path = ws.write_config(&ws.config(Mode::BestPlacement));

    let status = Command::new(env!("CARGO_BIN_EXE_logostamp"))
        .arg("--config")
        .arg(&config_path)
        .env("RUST_LOG", "off")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(ws.output_dir().join("a.png").is_file());
    assert!(!ws.output_dir().join("broken.png").exists());
}

#[test]
fn test_cli_fails_on_missing_input_dir() {
    let ws = Workspace::new().with_logos();
    let mut config = ws.config(Mode::BestPlacement);
    config.input_dir = ws.root().join("absent");
    let config_path = ws.write_config(&config);

    let status = Command::new(env!("CARGO_BIN_EXE_logostamp"))
        .arg("--config")
        .arg(&config_path)
        .status()
        .unwrap();

    assert!(!status.success());
}
