//! Pitch trajectory simulation library.
//!
//! Reconstructs the flight of recorded baseball pitches from their launch
//! kinematics and maps the results into a shared stadium-relative frame:
//!
//! - Fixed-step explicit Euler integration of each pitch ([`integrator`])
//! - Index-aligned batch simulation over a set of pitches ([`batch`])
//! - Recenter/scale/mirror coordinate transform shared by trajectories
//!   and stadium geometry ([`transform`])
//! - Stadium outline loading from CSV reference data ([`stadium`])
//!
//! The library is pure data-in, data-out: it fetches nothing, persists
//! nothing, and renders nothing. Rendering consumers take the emitted
//! trajectories, transformed geometry, and an explicit [`ColorMap`].
//!
//! # Example
//!
//! ```
//! use pitchsim::{simulate, PitchEvent, Vec3, DEFAULT_TIME_STEP};
//!
//! let event = PitchEvent::new(
//!     Vec3::new(1.0, 50.0, 6.0),
//!     Vec3::new(2.0, -130.0, -5.0),
//!     Vec3::new(-10.0, 25.0, -20.0),
//!     0.4,
//!     "Four-Seam Fastball",
//!     true,
//! );
//! let trajectories = simulate(&[event], DEFAULT_TIME_STEP).unwrap();
//! assert_eq!(trajectories.len(), 1);
//! assert_eq!(trajectories[0].samples[0].elapsed_time, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::doc_markdown)]

pub mod batch;
pub mod constants;
pub mod error;
pub mod event;
pub mod integrator;
pub mod metrics;
pub mod stadium;
pub mod transform;
pub mod vector;

#[cfg(feature = "python-bindings")]
pub mod python;

pub use batch::simulate;
pub use constants::{ColorMap, SimConfig, PITCH_OFFSET, STADIUM_SCALE};
pub use error::{Error, Result};
pub use event::{PitchEvent, Trajectory, TrajectorySample};
pub use integrator::{euler_step, integrate, DEFAULT_TIME_STEP};
pub use metrics::{plate_crossing, PlateCrossing, TrajectoryMetrics};
pub use stadium::{load_segments, StadiumSegment};
pub use transform::{transform_points, TransformConfig};
pub use vector::Vec3;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
