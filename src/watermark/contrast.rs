//! Legibility scoring of a logo render against the background it covers.
//!
//! Both strategies compare a *logo render* (the logo drawn alone, where pure
//! black pixels are "ink", i.e. masked or glyph area) with a same-sized crop
//! of the original image.
//!
//! - [`LuminanceEdgeScorer`]: mean WCAG contrast ratio across every
//!   ink/non-ink transition found scanning row-major.
//! - [`MeanColorDistanceScorer`]: Euclidean distance between the mean color
//!   of the background and the mean color of the non-ink logo pixels.
//!
//! Higher scores mean more legible placements. Both are pure functions over
//! their inputs.

use crate::error::StampError;
use crate::raster::RasterImage;
use serde::{Deserialize, Serialize};

/// Non-negative legibility metric; higher is better, unbounded above.
pub type ContrastScore = f64;

/// Strategy seam used by the placement selector.
pub trait ContrastScorer: Send + Sync {
    /// Stable strategy name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Score `logo_render` against `background`. Both must have the same
    /// dimensions.
    fn score(
        &self,
        logo_render: &RasterImage,
        background: &RasterImage,
    ) -> Result<ContrastScore, StampError>;
}

/// Selectable scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringStrategy {
    LuminanceEdge,
    #[default]
    MeanColorDistance,
}

impl ScoringStrategy {
    pub fn scorer(&self) -> Box<dyn ContrastScorer> {
        match self {
            ScoringStrategy::LuminanceEdge => Box::new(LuminanceEdgeScorer),
            ScoringStrategy::MeanColorDistance => Box::new(MeanColorDistanceScorer),
        }
    }
}

/// A pixel is ink when its color is exactly pure black.
#[inline]
pub fn is_ink(rgb: [u8; 3]) -> bool {
    rgb == [0, 0, 0]
}

/// sRGB gamma decode of one 8-bit channel (WCAG 2.0 threshold).
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c < 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(rgb: [u8; 3]) -> f64 {
    0.2126 * linearize(rgb[0]) + 0.7152 * linearize(rgb[1]) + 0.0722 * linearize(rgb[2])
}

/// WCAG contrast ratio between two relative luminances, in [1, 21].
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

fn check_same_size(logo_render: &RasterImage, background: &RasterImage) -> Result<(), StampError> {
    if logo_render.dimensions() != background.dimensions() {
        return Err(StampError::invalid_param(
            "background",
            format!(
                "logo render is {}x{} but background crop is {}x{}",
                logo_render.width(),
                logo_render.height(),
                background.width(),
                background.height()
            ),
        ));
    }
    Ok(())
}

/// Mean contrast ratio across ink/non-ink transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuminanceEdgeScorer;

/// Accumulator for the row-major transition scan.
///
/// The "searching" state carries across row boundaries; a transition in the
/// first column has no left neighbour and is not sampled.
#[derive(Debug, Clone, Copy)]
struct EdgeScan {
    searching: bool,
    sum: f64,
    count: usize,
}

impl Default for EdgeScan {
    fn default() -> Self {
        Self {
            searching: true,
            sum: 0.0,
            count: 0,
        }
    }
}

impl EdgeScan {
    fn step(self, logo: &RasterImage, background: &RasterImage, x: u32, y: u32) -> Self {
        let ink = is_ink(logo.rgb(x, y));

        // Entering ink: the text side is the left neighbour in the logo.
        // Leaving ink: the text side is this pixel, background on the left.
        let (logo_x, background_x, searching) = match (ink, self.searching) {
            (true, false) => (x.wrapping_sub(1), x, true),
            (false, true) => (x, x.wrapping_sub(1), false),
            _ => return self,
        };

        let mut next = Self { searching, ..self };
        if x == 0 {
            return next;
        }

        let text_luminance = relative_luminance(logo.rgb(logo_x, y));
        let background_luminance = relative_luminance(background.rgb(background_x, y));
        next.sum += contrast_ratio(text_luminance, background_luminance);
        next.count += 1;
        next
    }
}

impl ContrastScorer for LuminanceEdgeScorer {
    fn name(&self) -> &'static str {
        "luminance-edge"
    }

    fn score(
        &self,
        logo_render: &RasterImage,
        background: &RasterImage,
    ) -> Result<ContrastScore, StampError> {
        check_same_size(logo_render, background)?;

        let (width, height) = logo_render.dimensions();
        let scan = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .fold(EdgeScan::default(), |scan, (x, y)| {
                scan.step(logo_render, background, x, y)
            });

        if scan.count == 0 {
            return Err(StampError::insufficient_samples(self.name()));
        }
        Ok(scan.sum / scan.count as f64)
    }
}

/// Distance between mean background color and mean non-ink logo color.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanColorDistanceScorer;

#[derive(Debug, Clone, Copy, Default)]
struct ColorSum {
    sum: [u64; 3],
    count: u64,
}

impl ColorSum {
    fn add(self, rgb: [u8; 3]) -> Self {
        Self {
            sum: [
                self.sum[0] + rgb[0] as u64,
                self.sum[1] + rgb[1] as u64,
                self.sum[2] + rgb[2] as u64,
            ],
            count: self.count + 1,
        }
    }

    fn mean(&self) -> Option<[f64; 3]> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some([
            self.sum[0] as f64 / n,
            self.sum[1] as f64 / n,
            self.sum[2] as f64 / n,
        ])
    }
}

impl ContrastScorer for MeanColorDistanceScorer {
    fn name(&self) -> &'static str {
        "mean-color-distance"
    }

    fn score(
        &self,
        logo_render: &RasterImage,
        background: &RasterImage,
    ) -> Result<ContrastScore, StampError> {
        check_same_size(logo_render, background)?;

        let background_mean = background
            .rgb_pixels()
            .fold(ColorSum::default(), ColorSum::add)
            .mean();
        let logo_mean = logo_render
            .rgb_pixels()
            .filter(|rgb| !is_ink(*rgb))
            .fold(ColorSum::default(), ColorSum::add)
            .mean();

        match (background_mean, logo_mean) {
            (Some(bg), Some(logo)) => Ok(bg
                .iter()
                .zip(logo.iter())
                .map(|(b, l)| (b - l).powi(2))
                .sum::<f64>()
                .sqrt()),
            _ => Err(StampError::insufficient_samples(self.name())),
        }
    }
}
