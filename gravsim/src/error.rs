//! Error type shared by the simulation and configuration layers

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Body '{name}' has invalid mass {mass} (must be finite and > 0)")]
    InvalidMass { name: String, mass: f64 },
    #[error("Bodies '{first}' and '{second}' occupy the same position")]
    CoincidentBodies { first: String, second: String },
    #[error("Body '{name}' would leave the step with a non-finite state")]
    NonFinite { name: String },
    #[error("Invalid time step {0} (must be finite and > 0)")]
    InvalidTimeStep(f64),
    #[error("Can't read scenario file {0}: {1}")]
    ScenarioReadError(String, io::Error),
    #[error("Can't parse scenario: {0}")]
    ScenarioParseError(serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
