use orbitsim::{ScenarioConfig, Scenario, Simulation};
use orbitsim::run_2d;
use orbitsim::{bench_gravity, bench_prediction};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "orbit.yaml")]
    file_name: String,

    /// Run one frame without a window and print the result
    #[arg(long)]
    headless: bool,

    /// Run the solver and predictor benchmarks
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn print_frame(sim: &mut Simulation) {
    let report = sim.recompute();
    if let Err(e) = report.gravity {
        println!("gravity solve aborted: {e}");
    }

    let state = sim.render_state();
    for (i, b) in state.bodies.iter().enumerate() {
        println!(
            "body {i}: x = ({:.3}, {:.3}), gravity = ({:.6e}, {:.6e}) |{:.6e}| at {:.3} deg, velocity = ({:.3}, {:.3}), path = ({:.6e}, {:.6e})",
            b.x.x, b.x.y,
            b.gravity_force.vector.x, b.gravity_force.vector.y,
            b.gravity_force.magnitude, b.gravity_force.direction,
            b.velocity_force.x, b.velocity_force.y,
            b.path_vector.x, b.path_vector.y,
        );
    }
    for pass in &report.prediction.passes {
        println!(
            "body {} {:?} pass: {} steps, stopped by {:?}",
            pass.body, pass.direction, pass.steps, pass.termination
        );
    }
    println!("visited cells: {}", state.visited.len());
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_prediction();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let mut sim = Simulation::new(scenario);

    if args.headless {
        print_frame(&mut sim);
    } else {
        run_2d(sim);
    }

    Ok(())
}
