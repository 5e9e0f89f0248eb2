//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler: each body's velocity is kicked by the
//! force computed from the positions at the start of the step, then its
//! position drifts with the NEW velocity. Bodies are processed one at a time
//! in collection order. Since every force is taken from the pre-step snapshot
//! this gives the same result as kicking all velocities before drifting any
//! position.

use log::trace;

use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::accumulate_forces;
use crate::simulation::states::{NVec2, System};

/// Advance `sys` by `dt` seconds
///
/// Either the whole step is applied and `sys.t` moves forward, or an error is
/// returned and `sys` is left exactly as it was.
pub fn symplectic_euler(sys: &mut System, dt: f64, engine: &Engine) -> Result<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimeStep(dt));
    }

    let n = sys.len();

    // F_n from x_n, one entry per body
    let mut forces = vec![NVec2::zeros(); n];
    accumulate_forces(sys.bodies(), engine.accumulation, &mut forces)?;

    // Kick into a staging buffer: v_n+1 = v_n + (F_n / m) * dt
    let mut v_new = Vec::with_capacity(n);
    for (b, f) in sys.bodies().iter().zip(forces.iter()) {
        let v = b.velocity + (*f / b.mass()) * dt;

        if engine.check_finite {
            // drift target x_n+1 = x_n + v_n+1 * dt
            let x = b.position + v * dt;
            if !is_finite(&v) || !is_finite(&x) {
                return Err(SimError::NonFinite { name: b.name.clone() });
            }
        }

        v_new.push(v);
    }

    // Commit: velocity first, then drift with it
    for (b, v) in sys.bodies_mut().iter_mut().zip(v_new) {
        b.velocity = v;
        b.update_position(dt);
    }

    sys.t += dt;
    trace!("advanced {} bodies by {} s, t = {} s", n, dt, sys.t);

    Ok(())
}

fn is_finite(v: &NVec2) -> bool {
    v.iter().all(|c| c.is_finite())
}
