//! Serde shapes of a scenario file.
//!
//! The whole document deserializes into [`ScenarioConfig`]. Engine options
//! and run length are optional-with-defaults where that makes sense; the
//! initial bodies are listed as [`BodyConfig`] entries. Nothing here checks
//! physical validity. Masses and the time step are validated when the
//! runtime types are built.
//!
//! # YAML format
//! Units are SI throughout:
//!
//! ```yaml
//! engine:                   # optional section
//!   accumulation: "direct"  # or "parallel"
//!   check_finite: true
//!
//! parameters:
//!   dt: 1000.0              # seconds per step
//!   steps: 200              # number of steps
//!   output_every: 10        # optional, default 1
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     color: yellow
//!   - name: Earth
//!     mass: 5.972e24
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//!     color: blue
//! ```
//!
//! [`crate::Scenario::build_scenario`] maps this into the runtime types and
//! validates every body.

use serde::Deserialize;

/// How pair forces are evaluated each step
/// `accumulation: "direct"` or `accumulation: "parallel"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    #[serde(rename = "direct")] // single-threaded i < j pair loop
    #[default]
    Direct,

    #[serde(rename = "parallel")] // pair forces on the rayon pool, same summation order
    Parallel,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub accumulation: Accumulation,
    #[serde(default = "default_check_finite")]
    pub check_finite: bool, // reject a step that would produce NaN/Infinity
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accumulation: Accumulation::Direct,
            check_finite: default_check_finite(),
        }
    }
}

fn default_check_finite() -> bool {
    true
}

/// Run parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // step size in seconds
    pub steps: usize, // number of steps to run
    #[serde(default = "default_output_every")]
    pub output_every: usize, // emit the trajectory every n steps
}

fn default_output_every() -> usize {
    1
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub x: [f64; 2], // initial position (m)
    pub v: [f64; 2], // initial velocity (m/s)
    #[serde(default)]
    pub color: String, // passed through to the consumer
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
