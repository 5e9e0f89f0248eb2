//! High-level runtime engine settings
//!
//! Selects how pair forces are accumulated and whether each step is checked
//! for non-finite results before it is committed.

use crate::configuration::config::{Accumulation, EngineConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub accumulation: Accumulation, // direct or parallel pair evaluation
    pub check_finite: bool, // reject steps that produce NaN/Infinity
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            accumulation: Accumulation::Direct,
            check_finite: true,
        }
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            accumulation: cfg.accumulation,
            check_finite: cfg.check_finite,
        }
    }
}
