//! Stadium-relative coordinate transform.
//!
//! Trajectory ground tracks and stadium geometry start out in different
//! frames; this module maps both through the same recenter-and-scale
//! step so they overlay consistently. Per axis the mapping is
//!
//! ```text
//! output = sign * ((input - center) * scale + center)
//! ```
//!
//! with sign +1 on x and -1 on y (the chart frame mirrors y). Note the
//! mapping is NOT the identity at the center point when the sign is -1:
//! a point at `(x_center, y_center)` maps to `(x_center, -y_center)`.

use serde::{Deserialize, Serialize};

use crate::constants::{STADIUM_SCALE, X_CENTER, Y_CENTER};
use crate::error::{Error, Result};

/// Axis sign applied to x coordinates.
pub const X_SIGN: f64 = 1.0;

/// Axis sign applied to y coordinates (mirrored).
pub const Y_SIGN: f64 = -1.0;

/// Scale and center of the shared visualization frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Scale factor applied about the center. Zero degenerates every
    /// point to its center and is rejected.
    pub scale: f64,
    pub x_center: f64,
    pub y_center: f64,
}

impl TransformConfig {
    /// Creates a config with the given scale and the upstream chart centers.
    pub const fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            x_center: X_CENTER,
            y_center: Y_CENTER,
        }
    }

    /// Checks the precondition for [`transform_points`].
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Error::InvalidTransform(
                "scale must be finite and non-zero",
            ));
        }
        if !self.x_center.is_finite() || !self.y_center.is_finite() {
            return Err(Error::InvalidTransform("center must be finite"));
        }
        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::with_scale(STADIUM_SCALE)
    }
}

/// Remaps one coordinate about its center.
#[inline(always)]
fn transform_coordinate(coord: f64, center: f64, scale: f64, sign: f64) -> f64 {
    sign * ((coord - center) * scale + center)
}

/// Remaps one (x, y) point into the shared frame. Assumes a validated config.
#[inline(always)]
pub fn transform_point(point: &[f64; 2], config: &TransformConfig) -> [f64; 2] {
    [
        transform_coordinate(point[0], config.x_center, config.scale, X_SIGN),
        transform_coordinate(point[1], config.y_center, config.scale, Y_SIGN),
    ]
}

/// Remaps a point list into the shared frame.
///
/// Pure and stateless: the same input and config always produce the same
/// output. Applied identically to trajectory projections and stadium
/// segments so the two stay spatially consistent.
///
/// # Errors
///
/// [`Error::InvalidTransform`] when the config fails
/// [`TransformConfig::validate`].
pub fn transform_points(
    points: &[[f64; 2]],
    config: &TransformConfig,
) -> Result<Vec<[f64; 2]>> {
    config.validate()?;
    Ok(points.iter().map(|p| transform_point(p, config)).collect())
}
