//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the driver:
//! - engine settings (`Engine`)
//! - run parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)

use std::fs;
use std::path::Path;

use log::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::constants::*;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = &cfg.parameters;
        if !p_cfg.dt.is_finite() || p_cfg.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(p_cfg.dt));
        }
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            output_every: p_cfg.output_every.max(1),
        };

        let engine = Engine::from(&cfg.engine);

        // Bodies: map `BodyConfig` -> runtime `Body`, mass checked here
        let mut system = System::new();
        for bc in &cfg.bodies {
            system.add_body(body_from_config(bc)?);
        }

        debug!(
            "built scenario: {} bodies, dt = {} s, {} steps, {:?}",
            system.len(),
            parameters.dt,
            parameters.steps,
            engine.accumulation
        );

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s).map_err(SimError::ScenarioParseError)?;
        Self::build_scenario(cfg)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| SimError::ScenarioReadError(path.display().to_string(), err))?;
        Self::from_yaml_str(&text)
    }

    /// Sun, Earth and Mars on circular-ish orbits, 200 steps of 1000 s
    pub fn inner_solar_system() -> Result<Self> {
        let mut system = System::new();
        system.add_body(Body::new("Sun", SUN_MASS, NVec2::zeros(), NVec2::zeros(), "yellow")?);
        system.add_body(Body::new(
            "Earth",
            EARTH_MASS,
            NVec2::new(EARTH_ORBIT, 0.0),
            NVec2::new(0.0, EARTH_SPEED),
            "blue",
        )?);
        system.add_body(Body::new(
            "Mars",
            MARS_MASS,
            NVec2::new(MARS_ORBIT, 0.0),
            NVec2::new(0.0, MARS_SPEED),
            "red",
        )?);

        Ok(Self {
            engine: Engine::default(),
            parameters: Parameters::default(),
            system,
        })
    }

    /// Advance the system by one `parameters.dt` using this scenario's engine
    pub fn step(&mut self) -> Result<()> {
        self.system.advance_with(self.parameters.dt, &self.engine)
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    Body::new(
        bc.name.clone(),
        bc.mass,
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.color.clone(),
    )
}
