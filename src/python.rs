//! Python bindings for the pitch simulation library.
//!
//! Requires the `python-bindings` feature:
//! `cargo build --features python-bindings --release`
//!
//! Usage in Python:
//! ```python
//! import pitchsim
//! event = pitchsim.PyPitchEvent(
//!     (1.0, 50.0, 6.0), (2.0, -130.0, -5.0), (-10.0, 25.0, -20.0),
//!     0.4, "Slider", True,
//! )
//! trajectories = pitchsim.simulate_pitches([event], 0.01)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::batch;
use crate::constants::PITCH_OFFSET;
use crate::error::Error;
use crate::event::PitchEvent;
use crate::transform::{transform_points, TransformConfig};
use crate::vector::Vec3;

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// One recorded pitch's launch kinematics and outcome flags.
#[pyclass(name = "PyPitchEvent")]
#[derive(Debug, Clone)]
pub struct PyPitchEvent {
    event: PitchEvent,
}

#[pymethods]
impl PyPitchEvent {
    #[new]
    #[args(apply_release_offset = "false")]
    fn new(
        initial_position: (f64, f64, f64),
        initial_velocity: (f64, f64, f64),
        initial_acceleration: (f64, f64, f64),
        total_time: f64,
        pitch_type: String,
        is_strike: bool,
        apply_release_offset: bool,
    ) -> Self {
        let mut event = PitchEvent::new(
            Vec3::new(initial_position.0, initial_position.1, initial_position.2),
            Vec3::new(initial_velocity.0, initial_velocity.1, initial_velocity.2),
            Vec3::new(
                initial_acceleration.0,
                initial_acceleration.1,
                initial_acceleration.2,
            ),
            total_time,
            pitch_type,
            is_strike,
        );
        if apply_release_offset {
            event = event.with_release_offset(&PITCH_OFFSET);
        }
        Self { event }
    }

    #[getter]
    fn total_time(&self) -> f64 {
        self.event.total_time
    }

    #[getter]
    fn pitch_type(&self) -> String {
        self.event.pitch_type.clone()
    }

    #[getter]
    fn is_strike(&self) -> bool {
        self.event.is_strike
    }

    fn __repr__(&self) -> String {
        format!(
            "PyPitchEvent(pitch_type='{}', total_time={}, is_strike={})",
            self.event.pitch_type, self.event.total_time, self.event.is_strike
        )
    }
}

/// Simulates a batch of pitches.
///
/// Returns one sample list per event, index-aligned with the input; each
/// sample is `(t, x, y, z, vx, vy, vz)`.
#[pyfunction]
fn simulate_pitches(
    events: Vec<PyPitchEvent>,
    dt: f64,
) -> PyResult<Vec<Vec<(f64, f64, f64, f64, f64, f64, f64)>>> {
    let events: Vec<PitchEvent> = events.into_iter().map(|e| e.event).collect();
    let trajectories = batch::simulate(&events, dt).map_err(to_py_err)?;

    Ok(trajectories
        .iter()
        .map(|trajectory| {
            trajectory
                .samples
                .iter()
                .map(|s| {
                    (
                        s.elapsed_time,
                        s.position.x,
                        s.position.y,
                        s.position.z,
                        s.velocity.x,
                        s.velocity.y,
                        s.velocity.z,
                    )
                })
                .collect()
        })
        .collect())
}

/// Maps (x, y) points into the shared stadium frame.
#[pyfunction]
fn transform_coordinates(
    points: Vec<(f64, f64)>,
    scale: f64,
    x_center: f64,
    y_center: f64,
) -> PyResult<Vec<(f64, f64)>> {
    let config = TransformConfig {
        scale,
        x_center,
        y_center,
    };
    let points: Vec<[f64; 2]> = points.iter().map(|&(x, y)| [x, y]).collect();
    let out = transform_points(&points, &config).map_err(to_py_err)?;
    Ok(out.iter().map(|p| (p[0], p[1])).collect())
}

/// Module definition.
#[pymodule]
fn pitchsim(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPitchEvent>()?;
    m.add_function(wrap_pyfunction!(simulate_pitches, m)?)?;
    m.add_function(wrap_pyfunction!(transform_coordinates, m)?)?;
    m.add("DEFAULT_TIME_STEP", crate::integrator::DEFAULT_TIME_STEP)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
