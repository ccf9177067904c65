//! Pitch event and trajectory data model.
//!
//! A [`PitchEvent`] is the immutable launch record for one pitch; the
//! integrator turns it into a [`Trajectory`], an ordered time series of
//! [`TrajectorySample`]s. Events come from an upstream statistics feed
//! and are never mutated here.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

/// Launch kinematics and outcome flags for one recorded pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchEvent {
    /// Field coordinates at release.
    pub initial_position: Vec3,
    /// Velocity at release, units consistent with position and time.
    pub initial_velocity: Vec3,
    /// Acceleration, assumed constant over the flight.
    pub initial_acceleration: Vec3,
    /// Flight duration in seconds from release to plate crossing.
    pub total_time: f64,
    /// Descriptive label (e.g. "Four-Seam Fastball"); not used in integration.
    pub pitch_type: String,
    /// Outcome flag, passed through for downstream color mapping.
    pub is_strike: bool,
}

impl PitchEvent {
    /// Creates a new pitch event.
    pub fn new(
        initial_position: Vec3,
        initial_velocity: Vec3,
        initial_acceleration: Vec3,
        total_time: f64,
        pitch_type: impl Into<String>,
        is_strike: bool,
    ) -> Self {
        Self {
            initial_position,
            initial_velocity,
            initial_acceleration,
            total_time,
            pitch_type: pitch_type.into(),
            is_strike,
        }
    }

    /// Returns a copy with the release position shifted by `offset`.
    ///
    /// The upstream feed reports release coordinates in its own frame;
    /// ingest shifts them by [`crate::constants::PITCH_OFFSET`] before
    /// simulation.
    pub fn with_release_offset(&self, offset: &Vec3) -> Self {
        Self {
            initial_position: self.initial_position.add(offset),
            ..self.clone()
        }
    }

    /// Checks the event against the integrator's input contract.
    ///
    /// All nine kinematic components must be finite and `total_time`
    /// must be finite and non-negative.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if !self.initial_position.is_finite() {
            return Err("initial position has a non-finite component");
        }
        if !self.initial_velocity.is_finite() {
            return Err("initial velocity has a non-finite component");
        }
        if !self.initial_acceleration.is_finite() {
            return Err("initial acceleration has a non-finite component");
        }
        if !self.total_time.is_finite() {
            return Err("flight time is not finite");
        }
        if self.total_time < 0.0 {
            return Err("flight time is negative");
        }
        Ok(())
    }
}

/// One integration step's output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Time since release, in seconds.
    pub elapsed_time: f64,
}

/// Ordered, time-increasing sample sequence for one pitch.
///
/// The first sample is always the launch state at `elapsed_time = 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The plate-crossing sample, if any.
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// Elapsed time of the final sample, or 0 for an empty trajectory.
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |s| s.elapsed_time)
    }

    /// Ground-plane (x, y) projection of the flight path.
    pub fn ground_track(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.position.x, s.position.y])
            .collect()
    }

    /// Positions as an `n × 3` array for plotting consumers.
    pub fn position_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.samples.len(), 3), |(i, j)| {
            let p = &self.samples[i].position;
            match j {
                0 => p.x,
                1 => p.y,
                _ => p.z,
            }
        })
    }

    /// Velocities as an `n × 3` array.
    pub fn velocity_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.samples.len(), 3), |(i, j)| {
            let v = &self.samples[i].velocity;
            match j {
                0 => v.x,
                1 => v.y,
                _ => v.z,
            }
        })
    }
}
