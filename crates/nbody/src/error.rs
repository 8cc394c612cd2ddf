//! Error types for the N-body engine.
//!
//! Errors are split by when they can occur: [`ValidationError`] while
//! building inputs, [`ConfigurationError`] before the step loop starts, and
//! [`SimulationError`] as the single type a run returns.

use thiserror::Error;

/// Malformed input detected at a construction or call boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("body `{body}` has non-positive mass {mass}")]
    NonPositiveMass { body: String, mass: f64 },

    #[error("body `{body}` has invalid radius {radius}")]
    InvalidRadius { body: String, radius: f64 },

    #[error("vector ({x}, {y}) has non-finite components")]
    NonFiniteVector { x: f64, y: f64 },

    #[error("body name must not be empty")]
    EmptyName,

    #[error("body name `{0}` appears more than once")]
    DuplicateName(String),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),
}

/// Invalid run parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("timestep must be positive and finite, got {0}")]
    NonPositiveTimestep(f64),

    #[error("end time must be positive and finite, got {0}")]
    NonPositiveEndTime(f64),

    #[error("run needs {steps} steps, limit is {limit}")]
    TooManySteps { steps: u64, limit: u64 },
}

/// Everything that can abort a run. A failed run yields no samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("bodies `{first}` and `{second}` occupy the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("force model produced no resultant for body `{body}`")]
    MissingForce { body: String },
}

pub type SimResult<T> = Result<T, SimulationError>;
