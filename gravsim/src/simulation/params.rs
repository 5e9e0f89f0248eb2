//! Run parameters for the driver loop

use crate::simulation::constants::{DEFAULT_DT, DEFAULT_STEPS};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub steps: usize, // number of steps to run
    pub output_every: usize, // report the state every n steps
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            steps: DEFAULT_STEPS,
            output_every: 1,
        }
    }
}
