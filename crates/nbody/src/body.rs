use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::vector::Vector2D;

/// Position in metres (or whatever length unit the caller's `G` uses)
pub type Position = Vector2D;
/// Velocity in length units per time unit
pub type Velocity = Vector2D;
/// Acceleration in length units per time unit squared
pub type Acceleration = Vector2D;
/// Force in mass × acceleration units
pub type Force = Vector2D;

/// A point mass taking part in a run.
///
/// Identity, mass and radius are fixed at construction. The kinematic state
/// (`position`, `velocity`, `acceleration`) is written by an
/// [`Integrator`](crate::integrator::Integrator) once per step.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    radius: f64,
    pub position: Position,
    pub velocity: Velocity,
    pub acceleration: Acceleration,
}

impl Body {
    /// Creates a body with zero initial acceleration.
    ///
    /// Fails if the name is empty, the mass is not strictly positive and
    /// finite, the radius is negative or non-finite, or either vector has
    /// non-finite components.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::vector::Vector2D;
    ///
    /// let earth = Body::new(
    ///     "Earth",
    ///     5.972e24,
    ///     6.371e6,
    ///     Vector2D::new(1.496e11, 0.0),
    ///     Vector2D::new(0.0, 29_780.0),
    /// )
    /// .unwrap();
    /// assert_eq!(earth.name(), "Earth");
    ///
    /// assert!(Body::new("Ghost", 0.0, 1.0, Vector2D::zero(), Vector2D::zero()).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: Position,
        velocity: Velocity,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ValidationError::NonPositiveMass { body: name, mass });
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ValidationError::InvalidRadius { body: name, radius });
        }

        Ok(Self {
            name,
            mass,
            radius,
            position: position.validated()?,
            velocity: velocity.validated()?,
            acceleration: Vector2D::zero(),
        })
    }

    /// Creates a zero-radius body from `[x, y]` arrays.
    pub fn point(
        name: impl Into<String>,
        mass: f64,
        position: [f64; 2],
        velocity: [f64; 2],
    ) -> Result<Self, ValidationError> {
        Self::new(name, mass, 0.0, position.into(), velocity.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        let v = self.velocity.magnitude();
        0.5 * self.mass * v * v
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.difference(other.position).magnitude()
    }

    /// Angular momentum per unit mass about the origin (r × v, z-component)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.cross(self.velocity)
    }
}

/// Serializable description of a body, as received from a boundary layer.
///
/// Vectors are `[x, y]` arrays. Converting into a [`Body`] runs the same
/// validation as [`Body::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDefinition {
    pub name: String,
    pub mass: f64,
    #[serde(default)]
    pub radius: f64,
    pub position: Vector2D,
    #[serde(default)]
    pub velocity: Vector2D,
}

impl TryFrom<BodyDefinition> for Body {
    type Error = ValidationError;

    fn try_from(def: BodyDefinition) -> Result<Self, Self::Error> {
        Body::new(def.name, def.mass, def.radius, def.position, def.velocity)
    }
}

impl From<&Body> for BodyDefinition {
    fn from(body: &Body) -> Self {
        Self {
            name: body.name.clone(),
            mass: body.mass,
            radius: body.radius,
            position: body.position,
            velocity: body.velocity,
        }
    }
}
