//! Batch run over an input tree.
//!
//! Logos are loaded and scaled once, then every discovered image is stamped
//! and written to the mirrored output path. Images whose output already
//! exists are skipped. A failing image is logged and counted; it never stops
//! the run.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use thiserror::Error;

use super::discovery::{discover_images_excluding, output_path_for};
use super::progress::ProgressReporter;
use crate::config::{Config, Mode};
use crate::error::StampError;
use crate::raster::{self, RasterImage};
use crate::watermark::{
    scale, stamp_best_placement, tile_watermark, ContrastScorer, LogoPair, WatermarkConfig,
};

/// Errors that abort a whole batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Input directory {} does not exist", path.display())]
    MissingInputDir { path: PathBuf },

    #[error("Failed to prepare logo: {0}")]
    Logo(#[source] StampError),
}

/// Counts for a finished run. `processed + skipped + failed == discovered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub discovered: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: ImageOutcome) {
        match outcome {
            ImageOutcome::Processed => self.processed += 1,
            ImageOutcome::Skipped => self.skipped += 1,
            ImageOutcome::Failed => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageOutcome {
    Processed,
    Skipped,
    Failed,
}

/// Watermarking mode with its logos already loaded and scaled.
pub enum Stamper {
    BestPlacement {
        logos: LogoPair,
        scorer: Box<dyn ContrastScorer>,
    },
    Tiled {
        logo: RasterImage,
        config: WatermarkConfig,
    },
}

impl Stamper {
    pub fn prepare(config: &Config) -> Result<Self, BatchError> {
        match config.mode {
            Mode::BestPlacement => {
                let placement = &config.placement;
                let logos = LogoPair::load(
                    &placement.light_logo,
                    &placement.dark_logo,
                    placement.logo_width,
                )
                .map_err(BatchError::Logo)?;
                Ok(Stamper::BestPlacement {
                    logos,
                    scorer: placement.strategy.scorer(),
                })
            }
            Mode::Tiled => {
                let tiled = &config.tiled;
                let logo = raster::load(&tiled.logo)
                    .and_then(|logo| scale(&logo, tiled.logo_scale))
                    .map_err(BatchError::Logo)?;
                Ok(Stamper::Tiled {
                    logo,
                    config: tiled.clone(),
                })
            }
        }
    }

    pub fn stamp(&self, image: &RasterImage) -> Result<RasterImage, StampError> {
        match self {
            Stamper::BestPlacement { logos, scorer } => {
                let stamped = stamp_best_placement(logos, image, scorer.as_ref())?;
                tracing::debug!(placement = %stamped.placement, "Selected placement");
                Ok(stamped.image)
            }
            Stamper::Tiled { logo, config } => tile_watermark(image, logo, config),
        }
    }
}

/// Stamp one image unless its output already exists.
fn process_image(
    stamper: &Stamper,
    input_root: &Path,
    output_root: &Path,
    path: &Path,
) -> Result<ImageOutcome, StampError> {
    let output = output_path_for(input_root, output_root, path)?;
    if output.exists() {
        return Ok(ImageOutcome::Skipped);
    }

    let image = raster::load(path)?;
    let stamped = stamper.stamp(&image)?;
    raster::save(&stamped, &output)?;

    tracing::debug!(
        input = %path.display(),
        output = %output.display(),
        width = stamped.width(),
        height = stamped.height(),
        "Stamped image"
    );
    Ok(ImageOutcome::Processed)
}

fn process_logged(
    stamper: &Stamper,
    config: &Config,
    path: &Path,
    completed: &AtomicUsize,
    total: usize,
    progress: &dyn ProgressReporter,
) -> ImageOutcome {
    let outcome = match process_image(stamper, &config.input_dir, &config.output_dir, path) {
        Ok(ImageOutcome::Skipped) => {
            progress.suspend();
            tracing::info!(input = %path.display(), "Output exists, skipping");
            ImageOutcome::Skipped
        }
        Ok(outcome) => outcome,
        Err(e) if e.is_data_error() => {
            progress.suspend();
            tracing::warn!(input = %path.display(), error = %e, "Skipping image");
            ImageOutcome::Failed
        }
        Err(e) => {
            progress.suspend();
            tracing::error!(input = %path.display(), error = %e, "Failed to stamp image");
            ImageOutcome::Failed
        }
    };
    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
    progress.advance(done, total);
    outcome
}

/// Run the configured watermarking mode over every image in the input tree.
pub fn run_batch(
    config: &Config,
    progress: &dyn ProgressReporter,
) -> Result<BatchSummary, BatchError> {
    if !config.input_dir.is_dir() {
        return Err(BatchError::MissingInputDir {
            path: config.input_dir.clone(),
        });
    }

    let stamper = Stamper::prepare(config)?;
    let images = discover_images_excluding(&config.input_dir, Some(&config.output_dir));
    let total = images.len();
    let started = Instant::now();

    tracing::info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        mode = ?config.mode,
        images = total,
        parallel = config.batch.parallel,
        "Starting batch"
    );

    progress.start(total);
    let completed = AtomicUsize::new(0);
    let run = |path: &PathBuf| process_logged(&stamper, config, path, &completed, total, progress);

    let outcomes: Vec<ImageOutcome> = if config.batch.parallel {
        images.par_iter().map(run).collect()
    } else {
        images.iter().map(run).collect()
    };
    progress.finish();

    let mut summary = BatchSummary {
        discovered: total,
        ..Default::default()
    };
    for outcome in outcomes {
        summary.record(outcome);
    }

    tracing::info!(
        discovered = summary.discovered,
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Batch complete"
    );
    Ok(summary)
}
