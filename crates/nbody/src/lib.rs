//! Fixed-step 2D Newtonian N-body engine.
//!
//! Bodies are advanced in lockstep: every step takes one force snapshot of
//! the whole system, integrates each body against it, and records one
//! [`Sample`](series::Sample) per body into a [`TimeSeries`](series::TimeSeries).
//!
//! ```
//! use nbody::body::Body;
//!
//! let bodies = vec![
//!     Body::point("Sun", 1.989e30, [0.0, 0.0], [0.0, 0.0]).unwrap(),
//!     Body::point("Earth", 5.972e24, [1.496e11, 0.0], [0.0, 29_780.0]).unwrap(),
//! ];
//!
//! // One day at one-hour resolution
//! let series = nbody::run(bodies, 86_400.0, 3_600.0).unwrap();
//! assert_eq!(series.len(), 24 * 2);
//! ```

pub mod body;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod series;
pub mod simulation;
pub mod vector;

pub use error::{ConfigurationError, SimResult, SimulationError, ValidationError};
pub use simulation::run;
