//! Scenario files for the command-line runner.
//!
//! A scenario is a YAML (or JSON) document with run parameters and the
//! initial body set:
//!
//! ```yaml
//! parameters:
//!   end_time: 3.156e7         # total simulated time
//!   timestep: 604800          # fixed step, same unit as end_time
//!   gravitational_constant: 6.6743e-11   # optional, SI by default
//!   max_steps: 100000         # optional cap on the number of steps
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     radius: 6.9634e8        # optional, defaults to 0
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 0.0]    # optional, defaults to rest
//!   - name: Earth
//!     mass: 5.972e24
//!     position: [1.496e11, 0.0]
//!     velocity: [0.0, 29780.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use nbody::body::{Body, BodyDefinition};
use nbody::forces::{DirectGravity, G};
use nbody::simulation::SimulationConfig;

/// Run parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub end_time: f64,
    pub timestep: f64,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    #[serde(default)]
    pub max_steps: Option<u64>,
}

fn default_gravitational_constant() -> f64 {
    G
}

impl ParametersConfig {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            end_time: self.end_time,
            timestep: self.timestep,
            max_steps: self.max_steps,
        }
    }

    /// Direct gravity with the scenario's constant, which must be positive
    /// and finite.
    pub fn force_model(&self) -> Result<DirectGravity> {
        DirectGravity::try_with_constant(self.gravitational_constant)
            .context("invalid gravitational_constant in scenario parameters")
    }
}

/// Top-level scenario document
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyDefinition>,
}

impl ScenarioConfig {
    /// Reads a scenario from `path`. `.json` files are parsed as JSON,
    /// anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let scenario = if is_json {
            serde_json::from_reader(reader)
                .with_context(|| format!("invalid JSON scenario {}", path.display()))?
        } else {
            serde_yaml::from_reader(reader)
                .with_context(|| format!("invalid YAML scenario {}", path.display()))?
        };

        Ok(scenario)
    }

    /// Validates every body definition, in file order.
    pub fn build_bodies(&self) -> Result<Vec<Body>> {
        self.bodies
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, def)| {
                Body::try_from(def).with_context(|| format!("body #{} is invalid", idx + 1))
            })
            .collect()
    }
}
