//! Derived per-trajectory statistics.
//!
//! Column-oriented views of a simulated trajectory plus a plate-crossing
//! summary, for consumers that want arrays rather than sample structs.

use serde::{Deserialize, Serialize};

use crate::event::Trajectory;
use crate::vector::Vec3;

/// Column-oriented view of one trajectory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryMetrics {
    /// Elapsed time per sample.
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    pub vz: Vec<f64>,
    /// Speed magnitude per sample.
    pub speed: Vec<f64>,
    /// Horizontal (x, y) speed per sample.
    pub speed_xy: Vec<f64>,
}

impl TrajectoryMetrics {
    /// Builds the column view of a trajectory.
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        let n = trajectory.len();
        let mut metrics = Self {
            t: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            vx: Vec::with_capacity(n),
            vy: Vec::with_capacity(n),
            vz: Vec::with_capacity(n),
            speed: Vec::with_capacity(n),
            speed_xy: Vec::with_capacity(n),
        };

        for sample in &trajectory.samples {
            metrics.t.push(sample.elapsed_time);
            metrics.x.push(sample.position.x);
            metrics.y.push(sample.position.y);
            metrics.z.push(sample.position.z);
            metrics.vx.push(sample.velocity.x);
            metrics.vy.push(sample.velocity.y);
            metrics.vz.push(sample.velocity.z);
            metrics.speed.push(sample.velocity.magnitude());
            metrics.speed_xy.push(sample.velocity.magnitude_xy());
        }

        metrics
    }

    /// Number of samples behind the columns.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// True when built from an empty trajectory.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Plate-crossing summary for one trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCrossing {
    /// Position at the final sample.
    pub position: Vec3,
    /// Velocity at the final sample.
    pub velocity: Vec3,
    /// Elapsed time at the final sample.
    pub elapsed_time: f64,
    /// Height lost between release and the plate.
    pub drop: f64,
    /// Number of integration steps taken.
    pub steps: usize,
}

/// Summarizes where a trajectory ends, or `None` for an empty trajectory.
pub fn plate_crossing(trajectory: &Trajectory) -> Option<PlateCrossing> {
    let first = trajectory.samples.first()?;
    let last = trajectory.last()?;
    Some(PlateCrossing {
        position: last.position,
        velocity: last.velocity,
        elapsed_time: last.elapsed_time,
        drop: first.position.z - last.position.z,
        steps: trajectory.len() - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PitchEvent;
    use crate::integrator::integrate;
    use approx::assert_relative_eq;

    fn trajectory() -> Trajectory {
        let event = PitchEvent::new(
            Vec3::new(0.0, 50.0, 6.0),
            Vec3::new(0.0, -130.0, 0.0),
            Vec3::new(0.0, 0.0, -32.0),
            0.2,
            "Sinker",
            false,
        );
        integrate(&event, 0.05).unwrap()
    }

    #[test]
    fn test_columns_align_with_samples() {
        let trajectory = trajectory();
        let metrics = TrajectoryMetrics::from_trajectory(&trajectory);

        assert_eq!(metrics.len(), trajectory.len());
        for (i, sample) in trajectory.samples.iter().enumerate() {
            assert_eq!(metrics.t[i], sample.elapsed_time);
            assert_eq!(metrics.z[i], sample.position.z);
            assert_eq!(metrics.vy[i], sample.velocity.y);
        }
    }

    #[test]
    fn test_speed_columns() {
        let metrics = TrajectoryMetrics::from_trajectory(&trajectory());
        // Launch velocity is (0, -130, 0): full and horizontal speeds agree.
        assert_relative_eq!(metrics.speed[0], 130.0);
        assert_relative_eq!(metrics.speed_xy[0], 130.0);
        // Once vz builds up, full speed exceeds horizontal speed.
        let last = metrics.len() - 1;
        assert!(metrics.speed[last] > metrics.speed_xy[last]);
    }

    #[test]
    fn test_plate_crossing_summary() {
        let trajectory = trajectory();
        let crossing = plate_crossing(&trajectory).unwrap();

        assert_eq!(crossing.steps, trajectory.len() - 1);
        assert_eq!(crossing.position, trajectory.last().unwrap().position);
        assert!(crossing.drop > 0.0);
    }

    #[test]
    fn test_empty_trajectory_has_no_crossing() {
        assert!(plate_crossing(&Trajectory::default()).is_none());
        assert!(TrajectoryMetrics::from_trajectory(&Trajectory::default()).is_empty());
    }
}
