use gravsim::simulation::diagnostics::{total_energy, total_momentum};
use gravsim::simulation::trajectory::{write_frame, write_header};
use gravsim::{bench_advance, Scenario};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D Newtonian N-body simulator, writes the trajectory as CSV")]
struct Args {
    /// Scenario YAML file; the built-in Sun/Earth/Mars system is used if omitted
    #[arg(short = 'f', long = "file")]
    file_name: Option<PathBuf>,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the step size in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Run the advance benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.file_name {
        Some(path) => Scenario::from_yaml_file(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::inner_solar_system().context("failed to build the built-in scenario")?,
    };

    if let Some(steps) = args.steps {
        scenario.parameters.steps = steps;
    }
    if let Some(dt) = args.dt {
        scenario.parameters.dt = dt;
    }

    Ok(scenario)
}

fn run(scenario: &mut Scenario) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_header(&mut out)?;
    write_frame(&mut out, 0, &scenario.system)?;

    let every = scenario.parameters.output_every;
    for step in 1..=scenario.parameters.steps {
        scenario
            .step()
            .with_context(|| format!("step {} failed at t = {} s", step, scenario.system.time()))?;

        if step % every == 0 {
            write_frame(&mut out, step, &scenario.system)?;
            let p = total_momentum(&scenario.system);
            match total_energy(&scenario.system) {
                Ok(e) => debug!("step {step}: E = {e:e} J, p = ({:e}, {:e}) kg m/s", p.x, p.y),
                Err(err) => debug!("step {step}: energy undefined ({err})"),
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_advance()?;
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;
    info!(
        "running {} bodies for {} steps of {} s",
        scenario.system.len(),
        scenario.parameters.steps,
        scenario.parameters.dt
    );

    run(&mut scenario)?;

    info!("finished at t = {} s", scenario.system.time());
    Ok(())
}
