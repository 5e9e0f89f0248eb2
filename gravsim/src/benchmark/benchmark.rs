use std::time::Instant;

use crate::configuration::config::Accumulation;
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic System of size `n`
/// Bodies sit on a spiral so no two share a position.
fn make_system(n: usize) -> Result<System> {
    let mut sys = System::new();

    for i in 0..n {
        let i_f = i as f64;
        let radius = 1.0e10 * (1.0 + i_f);
        let angle = i_f * 0.37;
        let x = NVec2::new(radius * angle.cos(), radius * angle.sin());
        // tangential, roughly orbital speed
        let v = NVec2::new(-angle.sin(), angle.cos()) * 1.0e4;

        sys.add_body(Body::new(format!("b{i}"), 1.0e24, x, v, "white")?);
    }

    Ok(sys)
}

/// Time `advance` for direct and parallel accumulation over a range of n
/// Prints one line per n.
pub fn bench_advance() -> Result<()> {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5; // timed steps per model
    let dt = 1.0e3;

    let direct = Engine {
        accumulation: Accumulation::Direct,
        ..Engine::default()
    };
    let parallel = Engine {
        accumulation: Accumulation::Parallel,
        ..Engine::default()
    };

    for n in ns {
        let template = make_system(n)?;

        let mut sys_direct = template.clone();
        // Warm up
        sys_direct.advance_with(dt, &direct)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sys_direct.advance_with(dt, &direct)?;
        }
        let direct_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        let mut sys_par = template.clone();
        // Warm up
        sys_par.advance_with(dt, &parallel)?;

        let t1 = Instant::now();
        for _ in 0..steps {
            sys_par.advance_with(dt, &parallel)?;
        }
        let par_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:5}, direct step = {:10.6} ms, parallel step = {:10.6} ms",
            n,
            direct_per_step * 1000.0,
            par_per_step * 1000.0
        );
    }

    Ok(())
}
