//! Time integration for N-body systems
//!
//! An integrator advances a single body by one timestep given the resultant
//! force on it. It never sees other bodies, so the order in which bodies are
//! integrated within a step cannot change the result.

use crate::body::{Body, Force};
use crate::vector::Vector2D;

/// Advances one body by one timestep
pub trait Integrator {
    /// Update `body` in place under `force` for `dt` time units
    ///
    /// The body's acceleration is replaced, not accumulated: it is a pure
    /// function of the current force.
    fn step(&self, body: &mut Body, force: Force, dt: f64);

    /// Order of accuracy of the position update
    fn order(&self) -> u32;
}

/// Acceleration produced by `force` on a body of `mass`.
///
/// Built from the polar form of the force so direction is carried exactly
/// as the force calculator produced it.
pub fn acceleration_from_force(force: Force, mass: f64) -> Vector2D {
    Vector2D::from_polar(force.magnitude() / mass, force.angle())
}

/// Second-order position update with an explicit velocity kick
///
/// For a body at `x`, `v` under force `F`:
///
/// 1. `a = F / m` (replaces the previous acceleration)
/// 2. `v' = v + a·dt`
/// 3. `x' = x + v·dt + ½·a·dt²` (pre-update velocity)
///
/// The position is exact for constant acceleration over the step. Energy is
/// not conserved exactly: orbits drift outward at coarse timesteps, so use
/// a few dozen steps per orbit or more.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::integrator::{Integrator, Verlet};
/// use nbody::vector::Vector2D;
///
/// let mut body = Body::point("beacon", 2.0, [0.0, 0.0], [1.0, 0.0]).unwrap();
///
/// // Constant 4 N push along y for 1 s
/// Verlet.step(&mut body, Vector2D::new(0.0, 4.0), 1.0);
///
/// assert!((body.acceleration.y() - 2.0).abs() < 1e-12);
/// assert!((body.velocity.y() - 2.0).abs() < 1e-12);
/// assert!((body.position.x() - 1.0).abs() < 1e-12);
/// assert!((body.position.y() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Verlet;

impl Integrator for Verlet {
    fn step(&self, body: &mut Body, force: Force, dt: f64) {
        let acceleration = acceleration_from_force(force, body.mass());
        let velocity = body.velocity;

        body.acceleration = acceleration;
        body.velocity = velocity + acceleration * dt;
        body.position = body.position + velocity * dt + acceleration * (0.5 * dt * dt);
    }

    fn order(&self) -> u32 {
        2
    }
}

/// Simple Euler integrator (1st order, for testing/comparison only)
///
/// Drifts with the pre-update velocity and then kicks. Included to
/// measure the benefit of the second-order position term in [`Verlet`].
///
/// **Do not use for production runs!** Use `Verlet` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, body: &mut Body, force: Force, dt: f64) {
        let acceleration = acceleration_from_force(force, body.mass());

        body.acceleration = acceleration;
        body.position += body.velocity * dt;
        body.velocity += acceleration * dt;
    }

    fn order(&self) -> u32 {
        1
    }
}
