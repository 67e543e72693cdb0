//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - the real bodies with their initial velocity forces
//!
//! The bundle is handed to `Simulation::new`, which owns it from then on.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::ConfigError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        if cfg.grid.width == 0 || cfg.grid.height == 0 || cfg.grid.scale == 0 {
            return Err(ConfigError::Grid);
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        let parameters = Parameters {
            grid_width: cfg.grid.width,
            grid_height: cfg.grid.height,
            scale: cfg.grid.scale,
            G: cfg.parameters.G,
            velocity_step: cfg.parameters.velocity_step,
            iteration_step: cfg.parameters.iteration_step,
        };

        Ok(Self { parameters, bodies })
    }
}

fn vec2(body: usize, field: &'static str, v: &[f64]) -> Result<NVec2, ConfigError> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(ConfigError::Dimension { body, field, got: v.len() }),
    }
}

fn build_body(i: usize, bc: &BodyConfig) -> Result<Body, ConfigError> {
    if !bc.m.is_finite() || bc.m < 0.0 {
        return Err(ConfigError::Mass { body: i, mass: bc.m });
    }

    let mut body = Body::new(vec2(i, "x", &bc.x)?, bc.m);
    body.velocity_force = vec2(i, "v", &bc.v)?;
    body.color = bc.color;
    body.is_static = bc.is_static;
    body.path_iterations = bc.path_iterations;
    Ok(body)
}
