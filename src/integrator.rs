//! Fixed-step kinematic integration of a single pitch.
//!
//! The integrator advances position and velocity with explicit (forward)
//! Euler under the constant acceleration reported for the pitch. The
//! update order is part of the contract: velocity advances with the
//! current acceleration, position advances with the PRE-update velocity.
//! Semi-implicit Euler (position from the updated velocity) produces
//! different trajectories and must not be substituted.

use crate::error::{Error, Result};
use crate::event::{PitchEvent, Trajectory, TrajectorySample};
use crate::vector::Vec3;

/// Default integration step size, in seconds.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Single forward-Euler step. Returns the updated `(position, velocity)`.
#[inline(always)]
pub fn euler_step(
    position: &Vec3,
    velocity: &Vec3,
    acceleration: &Vec3,
    dt: f64,
) -> (Vec3, Vec3) {
    let new_velocity = velocity.add_scaled(acceleration, dt);
    let new_position = position.add_scaled(velocity, dt);
    (new_position, new_velocity)
}

/// Integrates one pitch from release until it crosses the plate.
///
/// The trajectory starts with the launch state at `elapsed_time = 0` and
/// appends one sample per step until `elapsed_time >= total_time`. The
/// final sample may overshoot `total_time` by up to one `dt`; there is
/// no back-interpolation to the exact boundary, and downstream consumers
/// rely on that.
///
/// `total_time = 0` yields a single-sample trajectory equal to the
/// launch state.
///
/// # Errors
///
/// [`Error::InvalidTimeStep`] when `dt` is not positive and finite;
/// [`Error::MalformedEvent`] when the event fails [`PitchEvent::validate`].
pub fn integrate(event: &PitchEvent, dt: f64) -> Result<Trajectory> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidTimeStep(dt));
    }
    event.validate().map_err(Error::MalformedEvent)?;

    let steps = (event.total_time / dt).ceil() as usize;
    let mut samples = Vec::with_capacity(steps + 1);

    let mut position = event.initial_position;
    let mut velocity = event.initial_velocity;
    let acceleration = event.initial_acceleration;
    let mut elapsed_time = 0.0;

    samples.push(TrajectorySample {
        position,
        velocity,
        elapsed_time,
    });

    while elapsed_time < event.total_time {
        let (next_position, next_velocity) =
            euler_step(&position, &velocity, &acceleration, dt);
        position = next_position;
        velocity = next_velocity;
        elapsed_time += dt;

        samples.push(TrajectorySample {
            position,
            velocity,
            elapsed_time,
        });
    }

    Ok(Trajectory { samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn event(
        position: Vec3,
        velocity: Vec3,
        acceleration: Vec3,
        total_time: f64,
    ) -> PitchEvent {
        PitchEvent::new(position, velocity, acceleration, total_time, "Fastball", false)
    }

    #[test]
    fn test_constant_velocity_scenario() {
        // v = (0, 10, 0), T = 1.0, dt = 0.5 -> samples at t = 0, 0.5, 1.0
        // with positions (0,0,0), (0,5,0), (0,10,0).
        let e = event(Vec3::zero(), Vec3::new(0.0, 10.0, 0.0), Vec3::zero(), 1.0);
        let trajectory = integrate(&e, 0.5).unwrap();

        assert_eq!(trajectory.len(), 3);
        let times: Vec<f64> = trajectory.samples.iter().map(|s| s.elapsed_time).collect();
        assert_relative_eq!(times[0], 0.0);
        assert_relative_eq!(times[1], 0.5);
        assert_relative_eq!(times[2], 1.0);
        assert_relative_eq!(trajectory.samples[1].position.y, 5.0);
        assert_relative_eq!(trajectory.samples[2].position.y, 10.0);
        assert_relative_eq!(trajectory.samples[2].position.x, 0.0);
    }

    #[test]
    fn test_zero_acceleration_matches_analytic_result() {
        // Euler is exact for constant-velocity motion: the stepwise sum
        // telescopes to p0 + v0 * t regardless of step size.
        let v0 = Vec3::new(3.0, -130.5, 2.25);
        let p0 = Vec3::new(1.0, 50.0, 6.0);
        let e = event(p0, v0, Vec3::zero(), 0.47);
        let trajectory = integrate(&e, DEFAULT_TIME_STEP).unwrap();

        let last = trajectory.last().unwrap();
        let expected = p0.add_scaled(&v0, last.elapsed_time);
        assert_relative_eq!(last.position.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(last.position.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(last.position.z, expected.z, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_euler_update_order() {
        // One step from rest under acceleration: forward Euler moves the
        // position with the pre-update (zero) velocity, so the position
        // must not change on the first step even though velocity does.
        let e = event(Vec3::zero(), Vec3::zero(), Vec3::new(0.0, 0.0, -32.0), 0.1);
        let trajectory = integrate(&e, 0.1).unwrap();

        assert_eq!(trajectory.len(), 2);
        assert_relative_eq!(trajectory.samples[1].position.z, 0.0);
        assert_relative_eq!(trajectory.samples[1].velocity.z, -3.2);
    }

    #[test]
    fn test_zero_duration_yields_single_sample() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let v0 = Vec3::new(4.0, 5.0, 6.0);
        let e = event(p0, v0, Vec3::new(0.0, 0.0, -32.0), 0.0);
        let trajectory = integrate(&e, DEFAULT_TIME_STEP).unwrap();

        assert_eq!(trajectory.len(), 1);
        let only = trajectory.last().unwrap();
        assert_eq!(only.position, p0);
        assert_eq!(only.velocity, v0);
        assert_eq!(only.elapsed_time, 0.0);
    }

    #[test]
    fn test_final_sample_overshoots_by_at_most_one_step() {
        let e = event(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), Vec3::zero(), 0.99);
        let trajectory = integrate(&e, 0.5).unwrap();

        let last_t = trajectory.duration();
        assert!(last_t >= 0.99);
        assert!(last_t < 0.99 + 0.5);
        assert_relative_eq!(last_t, 1.0);
    }

    #[test]
    fn test_sample_times_increase() {
        let e = event(Vec3::zero(), Vec3::new(0.0, -130.0, 0.0), Vec3::new(0.0, 25.0, -15.0), 0.43);
        let trajectory = integrate(&e, DEFAULT_TIME_STEP).unwrap();
        for pair in trajectory.samples.windows(2) {
            assert!(pair[1].elapsed_time > pair[0].elapsed_time);
        }
    }

    #[test]
    fn test_determinism() {
        let e = event(
            Vec3::new(1.3, 50.2, 5.9),
            Vec3::new(2.1, -133.7, -4.8),
            Vec3::new(-11.2, 26.3, -18.5),
            0.41,
        );
        let a = integrate(&e, DEFAULT_TIME_STEP).unwrap();
        let b = integrate(&e, DEFAULT_TIME_STEP).unwrap();
        // Bit-for-bit identical, not merely approximately equal.
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_time_step() {
        let e = event(Vec3::zero(), Vec3::zero(), Vec3::zero(), 1.0);
        assert!(matches!(integrate(&e, 0.0), Err(Error::InvalidTimeStep(_))));
        assert!(matches!(integrate(&e, -0.01), Err(Error::InvalidTimeStep(_))));
        assert!(matches!(
            integrate(&e, f64::NAN),
            Err(Error::InvalidTimeStep(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_event() {
        let mut e = event(Vec3::zero(), Vec3::zero(), Vec3::zero(), 1.0);
        e.total_time = -1.0;
        assert!(matches!(
            integrate(&e, DEFAULT_TIME_STEP),
            Err(Error::MalformedEvent("flight time is negative"))
        ));
    }
}
