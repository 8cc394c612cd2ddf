//! Direct N-body gravity (O(N²) implementation)

use log::trace;

use crate::body::{Body, Force};
use crate::error::{SimResult, SimulationError, ValidationError};
use crate::forces::{ForceModel, ForceSnapshot, G};
use crate::vector::Vector2D;

/// Direct O(N²) gravitational force computation
///
/// Every body is pulled toward every other body with magnitude
/// `G·m_i·m_j / r²`. There is no softening: two bodies at the same position
/// abort the computation with [`SimulationError::CoincidentBodies`].
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
///
/// let bodies = vec![
///     Body::point("Sun", 1.989e30, [0.0, 0.0], [0.0, 0.0]).unwrap(),
///     Body::point("Earth", 5.972e24, [1.496e11, 0.0], [0.0, 29_780.0]).unwrap(),
/// ];
///
/// let forces = DirectGravity::new().resultant_forces(&bodies).unwrap();
///
/// // Earth is pulled toward the Sun (negative x)
/// assert!(forces.get("Earth").unwrap().x() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Gravitational constant in the caller's unit system
    pub g: f64,
}

impl DirectGravity {
    /// Creates a direct gravity force using the SI constant [`G`]
    pub fn new() -> Self {
        Self { g: G }
    }

    /// Creates a direct gravity force with a custom gravitational constant
    ///
    /// Useful for natural units (`G = 1`) or astronomical units
    /// (`G = 4π²` in AU³ M☉⁻¹ year⁻²).
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }

    /// Like [`with_constant`](Self::with_constant), for constants read from
    /// user input: `g` must be positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::forces::DirectGravity;
    ///
    /// assert!(DirectGravity::try_with_constant(1.0).is_ok());
    /// assert!(DirectGravity::try_with_constant(f64::NAN).is_err());
    /// assert!(DirectGravity::try_with_constant(-1.0).is_err());
    /// ```
    pub fn try_with_constant(g: f64) -> Result<Self, ValidationError> {
        if !(g.is_finite() && g > 0.0) {
            return Err(ValidationError::InvalidGravitationalConstant(g));
        }
        Ok(Self { g })
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn resultant_forces(&self, bodies: &[Body]) -> SimResult<ForceSnapshot> {
        let mut snapshot = ForceSnapshot::with_capacity(bodies.len());

        for (i, body) in bodies.iter().enumerate() {
            let resultant = bodies
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .try_fold(Vector2D::zero(), |acc, (_, other)| {
                    pairwise_force(body, other, self.g).map(|f| acc + f)
                })?;

            trace!(
                "resultant on {}: ({:e}, {:e})",
                body.name(),
                resultant.x(),
                resultant.y()
            );
            snapshot.push(body.name(), resultant);
        }

        Ok(snapshot)
    }

    fn potential_energy(&self, bodies: &[Body]) -> SimResult<f64> {
        // Each unordered pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| bodies[i + 1..].iter().map(move |b| (a, b)))
            .map(|(a, b)| -> SimResult<f64> {
                let r = separation(a, b)?;
                Ok(-self.g * a.mass() * b.mass() / r)
            })
            .sum()
    }
}

/// Gravitational force exerted on `body` by `other`.
///
/// Points from `body` toward `other`. Swapping the arguments gives the
/// opposite force (to rounding).
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::pairwise_force;
///
/// let a = Body::point("a", 2.0, [0.0, 0.0], [0.0, 0.0]).unwrap();
/// let b = Body::point("b", 3.0, [0.0, 2.0], [0.0, 0.0]).unwrap();
///
/// // G = 1: |F| = 2 * 3 / 2² = 1.5, pointing up
/// let f = pairwise_force(&a, &b, 1.0).unwrap();
/// assert!((f.y() - 1.5).abs() < 1e-12);
/// assert!(f.x().abs() < 1e-12);
/// ```
pub fn pairwise_force(body: &Body, other: &Body, g: f64) -> SimResult<Force> {
    let d = body.position.difference(other.position);
    let r = separation(body, other)?;
    let magnitude = g * body.mass() * other.mass() / (r * r);

    Ok(Vector2D::from_polar(magnitude, d.angle()))
}

fn separation(a: &Body, b: &Body) -> SimResult<f64> {
    let r = a.position.difference(b.position).magnitude();
    if r == 0.0 {
        return Err(SimulationError::CoincidentBodies {
            first: a.name().to_owned(),
            second: b.name().to_owned(),
        });
    }
    Ok(r)
}
