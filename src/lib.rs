// Logostamp library
// Logo watermarking for image batches

pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod raster;
pub mod watermark;
