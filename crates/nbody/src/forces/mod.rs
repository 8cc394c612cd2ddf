//! Force models for N-body simulations
//!
//! A force model turns one consistent snapshot of the body set into one
//! resultant force per body. It only ever sees `&[Body]`, so it cannot move
//! a body while the snapshot is being read.

use crate::body::{Body, Force};
use crate::error::SimResult;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::{pairwise_force, DirectGravity};

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻² (CODATA 2018)
pub const G: f64 = 6.674_30e-11;

/// A source of force on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
///
/// let bodies = vec![
///     Body::point("a", 1.0e10, [0.0, 0.0], [0.0, 0.0]).unwrap(),
///     Body::point("b", 1.0e10, [1.0, 0.0], [0.0, 0.0]).unwrap(),
/// ];
///
/// let forces = DirectGravity::new().resultant_forces(&bodies).unwrap();
/// assert!(forces.get("a").unwrap().x() > 0.0);
/// assert!(forces.get("b").unwrap().x() < 0.0);
/// ```
pub trait ForceModel {
    /// Compute the resultant force on every body from the positions in `bodies`
    fn resultant_forces(&self, bodies: &[Body]) -> SimResult<ForceSnapshot>;

    /// Compute total potential energy of the body set (optional)
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _bodies: &[Body]) -> SimResult<f64> {
        Ok(0.0)
    }
}

/// Resultant force per body at one instant, keyed by body name.
///
/// Built-in models push entries in body order; the driver still matches
/// entries to bodies by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForceSnapshot {
    entries: Vec<(String, Force)>,
}

impl ForceSnapshot {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: &str, force: Force) {
        self.entries.push((name.to_owned(), force));
    }

    /// Resultant force on the body called `name`.
    pub fn get(&self, name: &str) -> Option<Force> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
    }

    /// Resultant force on the body at `idx` in the slice the snapshot was taken from.
    pub fn by_index(&self, idx: usize) -> Option<Force> {
        self.entries.get(idx).map(|(_, f)| *f)
    }

    /// Resultant for `name`, checking position `idx` before scanning.
    pub fn resolve(&self, idx: usize, name: &str) -> Option<Force> {
        match self.entries.get(idx) {
            Some((n, f)) if n == name => Some(*f),
            _ => self.get(name),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Force)> + '_ {
        self.entries.iter().map(|(n, f)| (n.as_str(), *f))
    }

    /// Vector sum of all resultants. Zero (to rounding) for internal forces.
    pub fn net(&self) -> Force {
        self.entries.iter().map(|(_, f)| *f).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
