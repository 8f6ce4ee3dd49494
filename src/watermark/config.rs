//! Watermark parameter bundles.
//!
//! - [`PlacementConfig`]: light/dark logo pair, target logo width and the
//!   contrast scoring strategy for best-corner mode
//! - [`WatermarkConfig`]: logo, spacing, offsets, opacity and scale for the
//!   tiled mode
//!
//! Both are built once per batch run and only read afterwards.

use super::contrast::ScoringStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Default values
fn default_light_logo() -> PathBuf {
    PathBuf::from("assets/logo.png")
}

fn default_dark_logo() -> PathBuf {
    PathBuf::from("assets/logo-inverted.png")
}

fn default_logo_width() -> u32 {
    400
}

fn default_spacing() -> f32 {
    2.0
}

fn default_opacity() -> f32 {
    0.3
}

fn default_logo_scale() -> f32 {
    0.5
}

/// Best-corner placement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Logo drawn on dark backgrounds (default: assets/logo.png)
    #[serde(default = "default_light_logo")]
    pub light_logo: PathBuf,

    /// Logo drawn on light backgrounds (default: assets/logo-inverted.png)
    #[serde(default = "default_dark_logo")]
    pub dark_logo: PathBuf,

    /// Width in pixels both logos are scaled to, keeping aspect ratio (default: 400)
    #[serde(default = "default_logo_width")]
    pub logo_width: u32,

    /// Contrast scoring strategy (default: mean-color-distance)
    #[serde(default)]
    pub strategy: ScoringStrategy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            light_logo: default_light_logo(),
            dark_logo: default_dark_logo(),
            logo_width: default_logo_width(),
            strategy: ScoringStrategy::default(),
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.logo_width == 0 {
            return Err("placement.logo_width must be > 0".to_string());
        }
        Ok(())
    }
}

/// Tiled watermark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// Logo repeated over the image (default: assets/logo.png)
    #[serde(default = "default_light_logo")]
    pub logo: PathBuf,

    /// Grid step as a multiple of the scaled logo size (default: 2.0)
    #[serde(default = "default_spacing")]
    pub spacing: f32,

    /// Horizontal start of the grid on the padded canvas (default: 0)
    #[serde(default)]
    pub offset_x: u32,

    /// Vertical start of the grid on the padded canvas (default: 0)
    #[serde(default)]
    pub offset_y: u32,

    /// Opacity from 0.0 (transparent) to 1.0 (opaque) (default: 0.3)
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Logo scale factor (default: 0.5)
    #[serde(default = "default_logo_scale")]
    pub logo_scale: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            logo: default_light_logo(),
            spacing: default_spacing(),
            offset_x: 0,
            offset_y: 0,
            opacity: default_opacity(),
            logo_scale: default_logo_scale(),
        }
    }
}

impl WatermarkConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(format!(
                "tiled.opacity must be between 0.0 and 1.0, got {}",
                self.opacity
            ));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(format!("tiled.spacing must be > 0, got {}", self.spacing));
        }
        if !self.logo_scale.is_finite() || self.logo_scale <= 0.0 {
            return Err(format!(
                "tiled.logo_scale must be > 0, got {}",
                self.logo_scale
            ));
        }
        Ok(())
    }
}
