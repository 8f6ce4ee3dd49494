//! Position calculation for logo placement.
//!
//! # Position Modes
//!
//! - **Corner placements**: the logo sits flush against one of the four
//!   canvas corners, in either the light or the dark variant. The eight
//!   combinations are encoded as an ordinal 0-7 (bit0 = right, bit1 = bottom,
//!   bit2 = dark).
//! - **Checkerboard tiles**: a grid stepped by a multiple of the logo size
//!   where only cells with odd (column + row) are drawn.
//!
//! # Example
//!
//! ```ignore
//! use logostamp::watermark::position::{Corner, ImageDimensions, LogoDimensions};
//!
//! let image = ImageDimensions { width: 800, height: 600 };
//! let logo = LogoDimensions { width: 100, height: 50 };
//!
//! let origin = Corner::BottomRight.origin(&image, &logo)?;
//! assert_eq!((origin.x, origin.y), (700, 550));
//! ```

use crate::error::StampError;
use serde::{Deserialize, Serialize};

/// Dimensions of the canvas a logo is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Dimensions of the (already scaled) logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoDimensions {
    pub width: u32,
    pub height: u32,
}

/// Top-left pixel where a logo is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: u32,
    pub y: u32,
}

impl PlacementPosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Canvas corner a logo is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    /// Top-left pixel of a logo anchored to this corner.
    ///
    /// Fails when the logo does not fit on the canvas.
    pub fn origin(
        self,
        image: &ImageDimensions,
        logo: &LogoDimensions,
    ) -> Result<PlacementPosition, StampError> {
        if logo.width > image.width || logo.height > image.height {
            return Err(StampError::invalid_param(
                "placement",
                format!(
                    "{}x{} logo does not fit on {}x{} image",
                    logo.width, logo.height, image.width, image.height
                ),
            ));
        }

        let x = if self.is_right() {
            image.width - logo.width
        } else {
            0
        };
        let y = if self.is_bottom() {
            image.height - logo.height
        } else {
            0
        };
        Ok(PlacementPosition::new(x, y))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// Color style of a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }
}

/// One of the eight (corner x variant) candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub corner: Corner,
    pub variant: Variant,
}

impl Placement {
    /// Candidates in ordinal order: light corners before dark corners, and
    /// top-left, top-right, bottom-left, bottom-right within a variant.
    pub fn all() -> impl Iterator<Item = Placement> {
        (0u8..8).filter_map(Placement::from_ordinal)
    }

    pub fn new(corner: Corner, variant: Variant) -> Self {
        Self { corner, variant }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal > 7 {
            return None;
        }
        let corner = match ordinal & 0b011 {
            0 => Corner::TopLeft,
            1 => Corner::TopRight,
            2 => Corner::BottomLeft,
            _ => Corner::BottomRight,
        };
        let variant = if ordinal & 0b100 == 0 {
            Variant::Light
        } else {
            Variant::Dark
        };
        Some(Self { corner, variant })
    }

    pub fn ordinal(&self) -> u8 {
        let mut ordinal = 0;
        if self.corner.is_right() {
            ordinal |= 0b001;
        }
        if self.corner.is_bottom() {
            ordinal |= 0b010;
        }
        if self.variant == Variant::Dark {
            ordinal |= 0b100;
        }
        ordinal
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.variant.as_str(), self.corner.as_str())
    }
}

/// A drawn cell of the checkerboard tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePosition {
    /// 1-based column counter
    pub column: u32,
    /// 1-based row counter
    pub row: u32,
    pub position: PlacementPosition,
}

/// Calculate the checkerboard tile grid on a (padded) canvas.
///
/// Columns start at `offset_x` and advance by `trunc(spacing * logo.width)`
/// while strictly below `canvas.width - logo.width`; rows likewise. Counters
/// are 1-based and only cells with odd `column + row` are returned.
pub fn calculate_tiled_positions(
    canvas: &ImageDimensions,
    logo: &LogoDimensions,
    spacing: f32,
    offset_x: u32,
    offset_y: u32,
) -> Result<Vec<TilePosition>, StampError> {
    let step_x = grid_step(spacing, logo.width, "spacing")?;
    let step_y = grid_step(spacing, logo.height, "spacing")?;

    let end_x = canvas.width.saturating_sub(logo.width);
    let end_y = canvas.height.saturating_sub(logo.height);

    let mut positions = Vec::new();
    for (column, x) in (offset_x..end_x).step_by(step_x as usize).enumerate() {
        for (row, y) in (offset_y..end_y).step_by(step_y as usize).enumerate() {
            let (column, row) = (column as u32 + 1, row as u32 + 1);
            if (column + row) % 2 == 1 {
                positions.push(TilePosition {
                    column,
                    row,
                    position: PlacementPosition::new(x, y),
                });
            }
        }
    }
    Ok(positions)
}

fn grid_step(spacing: f32, logo_extent: u32, param: &str) -> Result<u32, StampError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(StampError::invalid_param(
            param,
            format!("spacing must be > 0, got {}", spacing),
        ));
    }
    let step = (spacing as f64 * logo_extent as f64) as u32;
    if step == 0 {
        return Err(StampError::invalid_param(
            param,
            format!(
                "spacing {} x logo extent {} truncates to a zero step",
                spacing, logo_extent
            ),
        ));
    }
    Ok(step)
}
