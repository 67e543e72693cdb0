use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Simulation;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::REFERENCE_G;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};

/// Helper to build `n` bodies spread over a 100x100 grid
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new(
                50.0 + (i_f * 0.37).sin() * 45.0,
                50.0 + (i_f * 0.13).cos() * 45.0,
            );
            Body::new(x, 500.0 + i_f)
        })
        .collect()
}

/// Time one gravity solve for growing body counts
pub fn bench_gravity() {
    let ns = [2, 8, 32, 128, 512];
    let gravity = NewtonianGravity { G: REFERENCE_G };

    for n in ns {
        let mut bodies = make_bodies(n);

        // Warm up
        let _ = gravity.solve(&mut bodies);

        let t0 = Instant::now();
        let result = gravity.solve(&mut bodies);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:4}, solve = {:10.6} ms, ok = {}", dt * 1000.0, result.is_ok());
    }
}

/// Time one full frame on the reference scenario for growing prediction budgets
/// Paste output directly into a spreadsheet to graph
pub fn bench_prediction() {
    println!("path_iterations,frame_ms,steps");

    for iterations in [10u32, 50, 100, 500, 1000, 5000] {
        let mut cfg = ScenarioConfig::default();
        for b in cfg.bodies.iter_mut() {
            b.path_iterations = iterations;
            // sideways kick so the walk curves instead of falling straight in
            b.v = vec![1.0e-3, 0.0];
        }
        cfg.grid.width = 10_000;
        cfg.grid.height = 10_000;

        let scenario = match Scenario::build_scenario(cfg) {
            Ok(s) => s,
            Err(e) => {
                println!("invalid benchmark scenario: {e}");
                return;
            }
        };
        let mut sim = Simulation::new(scenario);

        let t0 = Instant::now();
        let report = sim.recompute();
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{}", iterations, ms, report.prediction.total_steps());
    }
}
