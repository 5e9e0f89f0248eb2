//! Newtonian gravity between bodies of the 2D system
//!
//! Forces (not accelerations) are accumulated into a buffer indexed like
//! `System::bodies`. Every unordered pair (i, j) with i < j is evaluated once
//! and applied as an equal and opposite pair, so the per-pair contributions
//! cancel exactly.

use rayon::prelude::*;

use crate::configuration::config::Accumulation;
use crate::error::{Result, SimError};
use crate::simulation::constants::{NVec2, G};
use crate::simulation::states::Body;

impl Body {
    /// Force exerted on `self` by `other`, in newtons
    ///
    /// F = G * m_self * m_other / r^2, directed from `self` toward `other`.
    /// Coincident bodies (r = 0) are an error.
    pub fn gravitational_force_from(&self, other: &Body) -> Result<NVec2> {
        // displacement from self to other
        let d = other.position - self.position;
        let r = d.norm();
        if r == 0.0 {
            return Err(SimError::CoincidentBodies {
                first: self.name.clone(),
                second: other.name.clone(),
            });
        }

        let magnitude = G * self.mass() * other.mass() / (r * r);

        // unit vector toward other
        let direction = d / r;

        Ok(magnitude * direction)
    }
}

/// Compute the net force on every body into `out`
///
/// `out[i]` is zeroed first and ends up holding the sum of the forces
/// exerted on body `i` by all the others. Both modes add the pair forces in
/// the same order, so they produce bit-identical results. On a coincident
/// pair the first one in (i, j) order is reported and `out` is unspecified.
pub fn accumulate_forces(bodies: &[Body], mode: Accumulation, out: &mut [NVec2]) -> Result<()> {
    // Zero buffer
    for f in out.iter_mut() {
        *f = NVec2::zeros();
    }

    match mode {
        Accumulation::Direct => accumulate_direct(bodies, out),
        Accumulation::Parallel => accumulate_parallel(bodies, out),
    }
}

fn accumulate_direct(bodies: &[Body], out: &mut [NVec2]) -> Result<()> {
    let n = bodies.len();

    // Loop over each unordered pair (i, j) with i < j
    for i in 0..n {
        let bi = &bodies[i];
        for j in (i + 1)..n {
            // force on i from j; j feels the reaction
            let f = bi.gravitational_force_from(&bodies[j])?;
            out[i] += f;
            out[j] -= f;
        }
    }

    Ok(())
}

fn accumulate_parallel(bodies: &[Body], out: &mut [NVec2]) -> Result<()> {
    // Row i holds the forces on i from every j > i. Rows are evaluated in
    // parallel against the same borrowed snapshot of positions.
    let rows: Vec<Result<Vec<NVec2>>> = (0..bodies.len())
        .into_par_iter()
        .map(|i| {
            let bi = &bodies[i];
            bodies[i + 1..]
                .iter()
                .map(|bj| bi.gravitational_force_from(bj))
                .collect::<Result<Vec<_>>>()
        })
        .collect();

    // Sequential reduction in the same order as the direct loop
    for (i, row) in rows.into_iter().enumerate() {
        for (k, f) in row?.into_iter().enumerate() {
            let j = i + 1 + k;
            out[i] += f;
            out[j] -= f;
        }
    }

    Ok(())
}
