//! Directory-level batch processing.
//!
//! Discovers images under the input root, stamps each one with the
//! configured mode and writes the result under the output root with the
//! same relative path.

pub mod discovery;
pub mod progress;
pub mod runner;

pub use discovery::{
    discover_images, discover_images_excluding, is_supported_image, output_path_for,
    SUPPORTED_EXTENSIONS,
};
pub use progress::{render_progress_bar, ConsoleProgress, ProgressReporter, SilentProgress};
pub use runner::{run_batch, BatchError, BatchSummary, Stamper};
