//! Trajectory batch runner.
//!
//! Runs the integrator over an ordered collection of pitch events and
//! returns one trajectory per event, index-aligned with the input.
//! Pitches are independent of each other, so the result does not depend
//! on processing order; this implementation runs them sequentially.

use crate::error::{Error, Result};
use crate::event::{PitchEvent, Trajectory};
use crate::integrator::integrate;

/// Simulates every pitch in `events` with a shared step size.
///
/// Output trajectory `i` corresponds to `events[i]`. An empty slice is
/// valid input and produces an empty result.
///
/// All events are validated before any integration starts. A single
/// malformed event fails the whole batch with its index; silently
/// dropping it would corrupt the index alignment.
///
/// # Errors
///
/// [`Error::InvalidTimeStep`] when `dt` is not positive and finite;
/// [`Error::InvalidEvent`] naming the first event that fails validation.
pub fn simulate(events: &[PitchEvent], dt: f64) -> Result<Vec<Trajectory>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidTimeStep(dt));
    }

    for (index, event) in events.iter().enumerate() {
        event
            .validate()
            .map_err(|reason| Error::InvalidEvent { index, reason })?;
    }

    events.iter().map(|event| integrate(event, dt)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::DEFAULT_TIME_STEP;
    use crate::vector::Vec3;

    fn events() -> Vec<PitchEvent> {
        vec![
            PitchEvent::new(
                Vec3::new(1.0, 50.0, 6.0),
                Vec3::new(2.0, -130.0, -5.0),
                Vec3::new(-10.0, 25.0, -20.0),
                0.40,
                "Four-Seam Fastball",
                true,
            ),
            PitchEvent::new(
                Vec3::new(-1.5, 50.0, 5.8),
                Vec3::new(4.0, -120.0, -2.0),
                Vec3::new(-5.0, 22.0, -35.0),
                0.44,
                "Curveball",
                false,
            ),
            PitchEvent::new(
                Vec3::new(0.2, 50.0, 6.1),
                Vec3::new(1.0, -125.0, -4.0),
                Vec3::new(-12.0, 24.0, -25.0),
                0.42,
                "Slider",
                true,
            ),
        ]
    }

    #[test]
    fn test_empty_batch_is_not_an_error() {
        let trajectories = simulate(&[], DEFAULT_TIME_STEP).unwrap();
        assert!(trajectories.is_empty());
    }

    #[test]
    fn test_output_is_index_aligned() {
        let events = events();
        let trajectories = simulate(&events, DEFAULT_TIME_STEP).unwrap();

        assert_eq!(trajectories.len(), events.len());
        for (event, trajectory) in events.iter().zip(&trajectories) {
            let first = trajectory.samples[0];
            assert_eq!(first.position, event.initial_position);
            assert_eq!(first.velocity, event.initial_velocity);
            assert_eq!(first.elapsed_time, 0.0);
        }
    }

    #[test]
    fn test_permuting_input_permutes_output() {
        let forward = events();
        let mut reversed = events();
        reversed.reverse();

        let out_forward = simulate(&forward, DEFAULT_TIME_STEP).unwrap();
        let mut out_reversed = simulate(&reversed, DEFAULT_TIME_STEP).unwrap();
        out_reversed.reverse();

        assert_eq!(out_forward, out_reversed);
    }

    #[test]
    fn test_batch_determinism() {
        let events = events();
        let a = simulate(&events, DEFAULT_TIME_STEP).unwrap();
        let b = simulate(&events, DEFAULT_TIME_STEP).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_malformed_event_fails_the_whole_batch() {
        let mut events = events();
        events[1].total_time = -0.1;

        let err = simulate(&events, DEFAULT_TIME_STEP).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEvent {
                index: 1,
                reason: "flight time is negative"
            }
        ));
    }

    #[test]
    fn test_bad_time_step_rejected_before_validation() {
        let events = events();
        assert!(matches!(
            simulate(&events, 0.0),
            Err(Error::InvalidTimeStep(_))
        ));
    }
}
