//! Logo watermarking engine.
//!
//! Two modes share one alpha-compositing primitive:
//!
//! - **Best corner**: a light and a dark logo variant are tried in all four
//!   corners; each candidate is scored for legibility against the image
//!   region it would cover and the winner is stamped once.
//! - **Tiled**: a single logo repeated in a checkerboard grid over the whole
//!   image at reduced opacity.
//!
//! # Configuration Example
//!
//! ```yaml
//! mode: best-placement
//! placement:
//!   light_logo: assets/logo.png
//!   dark_logo: assets/logo-inverted.png
//!   logo_width: 400
//!   strategy: luminance-edge
//! tiled:
//!   logo: assets/logo.png
//!   spacing: 2.0
//!   opacity: 0.3
//!   logo_scale: 0.5
//! ```

pub mod compositor;
pub mod config;
pub mod contrast;
pub mod geometry;
pub mod placement;
pub mod position;
pub mod tiled;

// Re-export main types for convenience
pub use compositor::{overlay, overlay_onto, render_alone};
pub use config::{PlacementConfig, WatermarkConfig};
pub use contrast::{
    contrast_ratio, is_ink, relative_luminance, ContrastScore, ContrastScorer,
    LuminanceEdgeScorer, MeanColorDistanceScorer, ScoringStrategy,
};
pub use geometry::{crop, pad, scale, scale_to_width};
pub use placement::{
    composite_placement, embed_best_logo, evaluate_candidates, select_best_placement,
    stamp_best_placement, CandidateScore, LogoPair, LogoVariant, StampedImage,
};
pub use position::{
    calculate_tiled_positions, Corner, ImageDimensions, LogoDimensions, Placement,
    PlacementPosition, TilePosition, Variant,
};
pub use tiled::{embed_tiled_watermark, tile_watermark};
