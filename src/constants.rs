//! Shared frame constants and simulation configuration.
//!
//! Values here come from the upstream data set: the release-frame offset
//! applied at ingest, the stadium chart's center point and scale, and the
//! reference strike-zone rectangle drawn behind the trajectories.

use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

/// Offset added to feed-frame release coordinates before simulation.
pub const PITCH_OFFSET: Vec3 = Vec3 {
    x: 125.0,
    y: -200.0,
    z: 0.0,
};

/// Center of the stadium chart frame on the x axis.
pub const X_CENTER: f64 = 125.0;

/// Center of the stadium chart frame on the y axis.
pub const Y_CENTER: f64 = 199.0;

/// Scale that maps the stadium data set onto the trajectory frame.
pub const STADIUM_SCALE: f64 = 2.495 * 2.0 / 2.33;

/// Default cap on the number of pitch events ingested per run.
pub const DEFAULT_PITCH_LIMIT: usize = 5;

/// Reference strike-zone rectangle at the plate (y = 0 plane).
pub mod strike_zone {
    /// Half the zone width; the zone spans x in [-1, 1].
    pub const HALF_WIDTH: f64 = 1.0;
    /// Bottom edge height.
    pub const BOTTOM_Z: f64 = 1.5799978960203;
    /// Top edge height.
    pub const TOP_Z: f64 = 3.221186159159;

    /// Corner vertices in drawing order, for renderers.
    pub fn corners() -> [[f64; 3]; 4] {
        [
            [-HALF_WIDTH, 0.0, BOTTOM_Z],
            [HALF_WIDTH, 0.0, BOTTOM_Z],
            [HALF_WIDTH, 0.0, TOP_Z],
            [-HALF_WIDTH, 0.0, TOP_Z],
        ]
    }
}

/// Run-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Integration step size in seconds.
    pub dt: f64,
    /// Maximum number of events ingested per run.
    pub pitch_limit: usize,
    /// Offset applied to feed-frame release coordinates.
    pub release_offset: Vec3,
}

impl SimConfig {
    /// Configuration matching the upstream ingest defaults.
    pub const fn new() -> Self {
        Self {
            dt: crate::integrator::DEFAULT_TIME_STEP,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            release_offset: PITCH_OFFSET,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit strike-to-color mapping handed to renderers.
///
/// Replaces the module-level color table the charting code used to
/// consult; renderers receive this as an argument instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    /// Color for pitches flagged as strikes.
    pub strike: String,
    /// Color for everything else.
    pub ball: String,
}

impl ColorMap {
    /// Color for one pitch given its strike flag.
    pub fn color_for(&self, is_strike: bool) -> &str {
        if is_strike {
            &self.strike
        } else {
            &self.ball
        }
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            strike: "red".to_string(),
            ball: "black".to_string(),
        }
    }
}
