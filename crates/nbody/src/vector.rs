//! Immutable 2D vector value type
//!
//! Every physical vector quantity in the engine (position, velocity,
//! acceleration, force) is a [`Vector2D`]. The quantity a value stands for is
//! carried by the type aliases in [`crate::body`], not by separate types.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A 2D vector with polar and cartesian views.
///
/// Equality is exact component-wise float comparison. Callers that need a
/// tolerance must compare [`x`](Self::x) and [`y`](Self::y) themselves.
///
/// Serializes as a two-element array `[x, y]`. Deserializes from either
/// `[x, y]` or `{ x, y }`.
///
/// # Examples
///
/// ```
/// use nbody::vector::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// let up = Vector2D::from_polar(2.0, std::f64::consts::FRAC_PI_2);
/// assert!(up.x().abs() < 1e-12);
/// assert!((up.y() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "VectorRepr")]
pub struct Vector2D(Vector2<f64>);

#[derive(Deserialize)]
#[serde(untagged)]
enum VectorRepr {
    Pair([f64; 2]),
    Cartesian { x: f64, y: f64 },
}

impl From<VectorRepr> for Vector2D {
    fn from(repr: VectorRepr) -> Self {
        match repr {
            VectorRepr::Pair([x, y]) => Self::new(x, y),
            VectorRepr::Cartesian { x, y } => Self::new(x, y),
        }
    }
}

impl Vector2D {
    /// Creates a vector from cartesian components.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// Creates a vector from cartesian components, rejecting NaN and infinities.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::vector::Vector2D;
    ///
    /// assert!(Vector2D::try_new(1.0, 2.0).is_ok());
    /// assert!(Vector2D::try_new(f64::NAN, 2.0).is_err());
    /// ```
    pub fn try_new(x: f64, y: f64) -> Result<Self, ValidationError> {
        Self::new(x, y).validated()
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }

    /// Creates a vector from a magnitude and an angle in radians.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean length √(x² + y²).
    pub fn magnitude(&self) -> f64 {
        self.0.magnitude()
    }

    /// Direction in radians, `atan2(y, x)`, in (-π, π].
    ///
    /// The zero vector has angle 0.
    pub fn angle(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Returns `(magnitude, angle)`.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.angle())
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector2D) -> Vector2D {
        Self(self.0 + other.0)
    }

    /// Vector pointing from `self` to `other`, i.e. `other - self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::vector::Vector2D;
    ///
    /// let from = Vector2D::new(1.0, 1.0);
    /// let to = Vector2D::new(4.0, 5.0);
    /// assert_eq!(from.difference(to), Vector2D::new(3.0, 4.0));
    /// ```
    pub fn difference(self, other: Vector2D) -> Vector2D {
        Self(other.0 - self.0)
    }

    /// Multiplies both components by `scalar`.
    pub fn scale(self, scalar: f64) -> Vector2D {
        Self(self.0 * scalar)
    }

    pub fn negate(self) -> Vector2D {
        Self(-self.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    /// Returns `self` if both components are finite.
    pub fn validated(self) -> Result<Self, ValidationError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(ValidationError::NonFiniteVector {
                x: self.0.x,
                y: self.0.y,
            })
        }
    }

    /// 2D cross product (z-component of the 3D cross product).
    pub fn cross(self, other: Vector2D) -> f64 {
        self.0.x * other.0.y - self.0.y * other.0.x
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x(), v.y()]
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.scale(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Self(-self.0)
    }
}

impl std::iter::Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Self {
        iter.fold(Vector2D::zero(), |acc, v| acc + v)
    }
}
