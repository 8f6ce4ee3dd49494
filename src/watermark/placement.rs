//! Automatic corner placement.
//!
//! Every (corner x variant) candidate is rendered onto the image, the logo
//! render is scored against the untouched image region it would cover, and
//! the highest scoring candidate wins. Ties go to the lowest ordinal.
//!
//! # Example
//!
//! ```ignore
//! use logostamp::watermark::{embed_best_logo, ScoringStrategy};
//!
//! let stamped = embed_best_logo(
//!     "assets/logo.png",
//!     "assets/logo-inverted.png",
//!     "input/photo.jpg",
//!     400,
//!     ScoringStrategy::MeanColorDistance,
//! )?;
//! ```

use super::compositor::{overlay, render_alone};
use super::contrast::{ContrastScore, ContrastScorer, ScoringStrategy};
use super::geometry::{crop, scale_to_width};
use super::position::{ImageDimensions, LogoDimensions, Placement, PlacementPosition, Variant};
use crate::error::StampError;
use crate::raster::{self, RasterImage};
use std::path::Path;

/// A logo image tagged with its color variant.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoVariant {
    variant: Variant,
    image: RasterImage,
}

impl LogoVariant {
    pub fn new(variant: Variant, image: RasterImage) -> Self {
        Self { variant, image }
    }

    pub fn load(variant: Variant, path: impl AsRef<Path>) -> Result<Self, StampError> {
        Ok(Self::new(variant, raster::load(path)?))
    }

    /// Scale to `width` pixels wide, preserving the aspect ratio.
    pub fn scaled_to_width(&self, width: u32) -> Result<Self, StampError> {
        Ok(Self::new(self.variant, scale_to_width(&self.image, width)?))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> LogoDimensions {
        LogoDimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }
}

/// Light and dark logo variants, already scaled for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoPair {
    light: LogoVariant,
    dark: LogoVariant,
}

impl LogoPair {
    pub fn new(light: RasterImage, dark: RasterImage) -> Self {
        Self {
            light: LogoVariant::new(Variant::Light, light),
            dark: LogoVariant::new(Variant::Dark, dark),
        }
    }

    /// Load both logos and scale each to `logo_width`.
    pub fn load(
        light_path: impl AsRef<Path>,
        dark_path: impl AsRef<Path>,
        logo_width: u32,
    ) -> Result<Self, StampError> {
        let light = LogoVariant::load(Variant::Light, light_path)?.scaled_to_width(logo_width)?;
        let dark = LogoVariant::load(Variant::Dark, dark_path)?.scaled_to_width(logo_width)?;
        Ok(Self { light, dark })
    }

    pub fn get(&self, variant: Variant) -> &LogoVariant {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }
}

/// Score of a single candidate placement.
#[derive(Debug, Clone)]
pub struct CandidateScore {
    pub placement: Placement,
    pub position: PlacementPosition,
    pub score: ContrastScore,
    /// Logo-sized crop of the candidate composite
    pub preview: RasterImage,
}

/// Result of best-corner stamping.
#[derive(Debug, Clone)]
pub struct StampedImage {
    pub placement: Placement,
    pub image: RasterImage,
}

fn image_dimensions(image: &RasterImage) -> ImageDimensions {
    ImageDimensions {
        width: image.width(),
        height: image.height(),
    }
}

/// Render and score all eight candidates, in ordinal order.
pub fn evaluate_candidates(
    logos: &LogoPair,
    image: &RasterImage,
    scorer: &dyn ContrastScorer,
) -> Result<Vec<CandidateScore>, StampError> {
    let image_dims = image_dimensions(image);
    let light_render = render_alone(logos.light.image())?;
    let dark_render = render_alone(logos.dark.image())?;

    let mut candidates = Vec::with_capacity(8);
    for placement in Placement::all() {
        let logo = logos.get(placement.variant);
        let logo_render = match placement.variant {
            Variant::Light => &light_render,
            Variant::Dark => &dark_render,
        };

        let position = placement.corner.origin(&image_dims, &logo.dimensions())?;
        let (x2, y2) = (position.x + logo.width(), position.y + logo.height());

        let composite = overlay(image, logo.image(), position.x, position.y, 1.0)?;
        let preview = crop(&composite, position.x, position.y, x2, y2)?;
        let background = crop(image, position.x, position.y, x2, y2)?;

        let score = scorer.score(logo_render, &background)?;
        tracing::debug!(
            ordinal = placement.ordinal(),
            placement = %placement,
            strategy = scorer.name(),
            score,
            "Scored candidate placement"
        );

        candidates.push(CandidateScore {
            placement,
            position,
            score,
            preview,
        });
    }
    Ok(candidates)
}

/// Pick the most legible placement. The first candidate wins ties.
pub fn select_best_placement(
    logos: &LogoPair,
    image: &RasterImage,
    scorer: &dyn ContrastScorer,
) -> Result<Placement, StampError> {
    let candidates = evaluate_candidates(logos, image, scorer)?;
    let best = candidates
        .iter()
        .fold(None::<&CandidateScore>, |best, candidate| match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        })
        .map(|c| c.placement)
        .ok_or_else(|| StampError::insufficient_samples(scorer.name()))?;
    Ok(best)
}

/// Composite the logo for `placement` onto `image`.
pub fn composite_placement(
    logos: &LogoPair,
    image: &RasterImage,
    placement: Placement,
) -> Result<RasterImage, StampError> {
    let logo = logos.get(placement.variant);
    let position = placement
        .corner
        .origin(&image_dimensions(image), &logo.dimensions())?;
    overlay(image, logo.image(), position.x, position.y, 1.0)
}

/// Select the best placement for prepared logos and stamp it.
pub fn stamp_best_placement(
    logos: &LogoPair,
    image: &RasterImage,
    scorer: &dyn ContrastScorer,
) -> Result<StampedImage, StampError> {
    let placement = select_best_placement(logos, image, scorer)?;
    let stamped = composite_placement(logos, image, placement)?;
    Ok(StampedImage {
        placement,
        image: stamped,
    })
}

/// Load the logos and the image, scale both logos to `logo_width`, and
/// stamp the most legible single logo onto the image.
pub fn embed_best_logo(
    light_logo_path: impl AsRef<Path>,
    dark_logo_path: impl AsRef<Path>,
    image_path: impl AsRef<Path>,
    logo_width: u32,
    strategy: ScoringStrategy,
) -> Result<RasterImage, StampError> {
    let logos = LogoPair::load(light_logo_path, dark_logo_path, logo_width)?;
    let image = raster::load(image_path)?;
    let scorer = strategy.scorer();
    Ok(stamp_best_placement(&logos, &image, scorer.as_ref())?.image)
}
