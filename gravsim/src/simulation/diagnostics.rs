//! Conserved quantities and aggregate state of a `System`
//!
//! Used by the driver's periodic log line and by the conservation tests.

use crate::error::{Result, SimError};
use crate::simulation::constants::{NVec2, G};
use crate::simulation::states::System;

/// Sum of m * v over all bodies (kg m/s)
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies()
        .iter()
        .fold(NVec2::zeros(), |p, b| p + b.momentum())
}

pub fn total_mass(sys: &System) -> f64 {
    sys.bodies().iter().map(|b| b.mass()).sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass(sys: &System) -> Option<NVec2> {
    if sys.is_empty() {
        return None;
    }

    let weighted = sys
        .bodies()
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.position * b.mass());

    Some(weighted / total_mass(sys))
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies().iter().map(|b| b.kinetic_energy()).sum()
}

/// Pairwise potential energy, U = -G * m_i * m_j / r over i < j (J)
pub fn potential_energy(sys: &System) -> Result<f64> {
    let bodies = sys.bodies();
    let mut u = 0.0;

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let r = (bodies[j].position - bodies[i].position).norm();
            if r == 0.0 {
                return Err(SimError::CoincidentBodies {
                    first: bodies[i].name.clone(),
                    second: bodies[j].name.clone(),
                });
            }
            u -= G * bodies[i].mass() * bodies[j].mass() / r;
        }
    }

    Ok(u)
}

pub fn total_energy(sys: &System) -> Result<f64> {
    Ok(kinetic_energy(sys) + potential_energy(sys)?)
}
