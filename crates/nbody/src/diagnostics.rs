//! Conserved quantities for checking numerical drift
//!
//! None of these feed back into a run. They are read-only views over a body
//! set, used by tests and by callers reporting on a finished run.

use crate::body::Body;
use crate::series::Sample;
use crate::vector::Vector2D;

/// Total linear momentum `Σ m·v`
///
/// Constant for an isolated system.
pub fn total_momentum(bodies: &[Body]) -> Vector2D {
    bodies.iter().map(Body::momentum).sum()
}

pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Total angular momentum about the origin (z-component)
pub fn total_angular_momentum(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| b.specific_angular_momentum() * b.mass())
        .sum()
}

/// Mass-weighted mean position, `None` for an empty set
pub fn center_of_mass(bodies: &[Body]) -> Option<Vector2D> {
    if bodies.is_empty() {
        return None;
    }
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();

    let weighted: Vector2D = bodies.iter().map(|b| b.position * b.mass()).sum();
    Some(weighted * (1.0 / total_mass))
}

/// Total momentum of one recorded frame.
///
/// `masses` maps each body name in the frame to its mass; samples of bodies
/// not listed are ignored.
pub fn frame_momentum(frame: &[Sample], masses: &[(&str, f64)]) -> Vector2D {
    frame
        .iter()
        .filter_map(|s| {
            masses
                .iter()
                .find(|(name, _)| *name == s.body)
                .map(|(_, m)| Vector2D::new(s.vx, s.vy) * *m)
        })
        .sum()
}
