pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::constants::{NVec2, G};
pub use simulation::states::{Body, System};
pub use simulation::forces::accumulate_forces;
pub use simulation::integrator::symplectic_euler;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{Accumulation, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_advance;
