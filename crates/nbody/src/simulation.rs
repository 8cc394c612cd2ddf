//! Main simulation driver.
//!
//! Runs the fixed-step loop. Each step has two phases:
//! 1. Read: the force model computes every resultant from one snapshot
//! 2. Write: the integrator updates each body against its own resultant
//!
//! followed by recording one sample per body.

use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::body::{Body, Force};
use crate::error::{ConfigurationError, SimResult, SimulationError, ValidationError};
use crate::forces::{DirectGravity, ForceModel};
use crate::integrator::{Integrator, Verlet};
use crate::series::{Sample, TimeSeries};

/// Upper bound on the samples reserved before a run starts. Longer runs
/// grow the series as they go.
pub(crate) const MAX_RESERVED_SAMPLES: usize = 1 << 20;

/// Run parameters
///
/// `end_time` and `timestep` share one time unit. `max_steps` lets a caller
/// bound the work of a run before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub end_time: f64,
    pub timestep: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u64>,
}

impl SimulationConfig {
    pub fn new(end_time: f64, timestep: f64) -> Self {
        Self {
            end_time,
            timestep,
            max_steps: None,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Checks that both times are positive and finite and the step bound holds.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigurationError::NonPositiveTimestep(self.timestep));
        }
        if !(self.end_time.is_finite() && self.end_time > 0.0) {
            return Err(ConfigurationError::NonPositiveEndTime(self.end_time));
        }
        if let Some(limit) = self.max_steps {
            let steps = self.step_count();
            if steps > limit {
                return Err(ConfigurationError::TooManySteps { steps, limit });
            }
        }
        Ok(())
    }

    /// Number of steps a run takes: `ceil(end_time / timestep)`, or zero
    /// when `timestep >= end_time`.
    ///
    /// Only meaningful for a config that passes [`validate`](Self::validate)'s
    /// positivity checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::simulation::SimulationConfig;
    ///
    /// assert_eq!(SimulationConfig::new(10.0, 1.0).step_count(), 10);
    /// assert_eq!(SimulationConfig::new(10.0, 3.0).step_count(), 4);
    /// assert_eq!(SimulationConfig::new(1.0, 1.0).step_count(), 0);
    /// ```
    pub fn step_count(&self) -> u64 {
        if self.timestep >= self.end_time {
            return 0;
        }
        let mut steps = (self.end_time / self.timestep).ceil() as u64;
        // Division rounding can land one step either side of the loop condition
        while steps > 0 && self.time_at(steps - 1) >= self.end_time {
            steps -= 1;
        }
        while steps < u64::MAX && self.time_at(steps) < self.end_time {
            steps += 1;
        }
        steps
    }

    /// Simulation time of step `index`.
    pub fn time_at(&self, index: u64) -> f64 {
        index as f64 * self.timestep
    }
}

/// Fixed-step driver over a force model and an integrator
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::DirectGravity;
/// use nbody::integrator::Verlet;
/// use nbody::simulation::{Simulation, SimulationConfig};
///
/// let bodies = vec![
///     Body::point("a", 1.0, [-1.0, 0.0], [0.0, -0.5]).unwrap(),
///     Body::point("b", 1.0, [1.0, 0.0], [0.0, 0.5]).unwrap(),
/// ];
///
/// let sim = Simulation::new(DirectGravity::with_constant(1.0), Verlet);
/// let series = sim.run(bodies, &SimulationConfig::new(1.0, 0.1)).unwrap();
///
/// assert_eq!(series.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation<F, I> {
    force: F,
    integrator: I,
}

/// Direct SI gravity with the [`Verlet`] integrator
pub type NewtonianSimulation = Simulation<DirectGravity, Verlet>;

impl Default for NewtonianSimulation {
    fn default() -> Self {
        Self::new(DirectGravity::new(), Verlet)
    }
}

impl<F: ForceModel, I: Integrator> Simulation<F, I> {
    pub fn new(force: F, integrator: I) -> Self {
        Self { force, integrator }
    }

    pub fn force_model(&self) -> &F {
        &self.force
    }

    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Runs `bodies` from time zero to `config.end_time`.
    ///
    /// Returns one sample per body per step. Any error aborts the run and no
    /// samples are returned.
    pub fn run(&self, mut bodies: Vec<Body>, config: &SimulationConfig) -> SimResult<TimeSeries> {
        config.validate()?;
        check_unique_names(&bodies)?;

        let steps = config.step_count();
        debug!(
            "running {} bodies for {} steps (dt = {}, end = {}, order {} integrator)",
            bodies.len(),
            steps,
            config.timestep,
            config.end_time,
            self.integrator.order()
        );

        let mut series = TimeSeries::with_capacity(reserved_samples(steps, bodies.len()));

        for index in 0..steps {
            let elapsed = config.time_at(index);
            self.advance(&mut bodies, config.timestep)?;

            bodies
                .iter()
                .for_each(|body| series.append(Sample::from_body(elapsed, body)));

            trace!("step {index} recorded at t = {elapsed}");
        }

        debug!("run finished with {} samples", series.len());
        Ok(series)
    }

    /// Advances every body by one step: snapshot all forces, then integrate.
    ///
    /// Forces are matched to bodies by name. A snapshot missing any body
    /// fails with [`SimulationError::MissingForce`] before any body moves.
    pub fn advance(&self, bodies: &mut [Body], dt: f64) -> SimResult<()> {
        let forces = self.force.resultant_forces(bodies)?;

        let resolved = bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| {
                forces
                    .resolve(idx, body.name())
                    .ok_or_else(|| SimulationError::MissingForce {
                        body: body.name().to_owned(),
                    })
            })
            .collect::<SimResult<Vec<Force>>>()?;

        for (body, force) in bodies.iter_mut().zip(resolved) {
            self.integrator.step(body, force, dt);
        }

        Ok(())
    }
}

/// Runs `bodies` under SI Newtonian gravity with the [`Verlet`] integrator.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
///
/// let lonely = vec![Body::point("beacon", 1.0, [0.0, 0.0], [2.0, 0.0]).unwrap()];
/// let series = nbody::run(lonely, 3.0, 1.0).unwrap();
///
/// let xs: Vec<f64> = series.iter().map(|s| s.x).collect();
/// assert_eq!(xs, vec![2.0, 4.0, 6.0]);
/// ```
pub fn run(bodies: Vec<Body>, end_time: f64, timestep: f64) -> SimResult<TimeSeries> {
    NewtonianSimulation::default().run(bodies, &SimulationConfig::new(end_time, timestep))
}

/// Samples to reserve for `steps` steps of `bodies` bodies, capped at
/// [`MAX_RESERVED_SAMPLES`].
pub(crate) fn reserved_samples(steps: u64, bodies: usize) -> usize {
    usize::try_from(steps)
        .ok()
        .and_then(|s| s.checked_mul(bodies))
        .map_or(MAX_RESERVED_SAMPLES, |n| n.min(MAX_RESERVED_SAMPLES))
}

fn check_unique_names(bodies: &[Body]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(bodies.len());
    for body in bodies {
        if !seen.insert(body.name()) {
            return Err(ValidationError::DuplicateName(body.name().to_owned()));
        }
    }
    Ok(())
}
