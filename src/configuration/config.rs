//! Configuration types for loading orbit scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`GridConfig`]       – simulation grid size and screen scale
//! - [`ParametersConfig`] – physical constant and operator edit steps
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference two-body scenario:
//!
//! ```yaml
//! grid:
//!   width: 100              # cells along x
//!   height: 100             # cells along y
//!   scale: 5                # screen pixels per cell
//!
//! parameters:               # optional, these are the defaults
//!   G: 6.67e-11             # gravitational constant
//!   velocity_step: 0.1      # velocity edit per keystroke (times the velocity scale)
//!   iteration_step: 10      # path iteration edit per keystroke
//!
//! bodies:
//!   - x: [ 50.0, 10.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 500.0
//!     color: [ 0, 255, 0 ]
//!     static: false
//!     path_iterations: 50
//!   - x: [ 50.0, 50.0 ]
//!     m: 1600000.0
//!     color: [ 255, 255, 0 ]
//! ```
//!
//! `Scenario::build_scenario` validates this and maps it into runtime types.

use serde::Deserialize;

use crate::simulation::params::REFERENCE_G;

/// Simulation grid and its on-screen size
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub width: u32, // cells along x, walkers stop at x >= width
    pub height: u32, // cells along y, walkers stop at y >= height
    pub scale: u32, // pixels per cell
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 100, height: 100, scale: 5 }
    }
}

/// Physical constant and operator edit steps
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub velocity_step: f64, // base velocity change per edit
    pub iteration_step: u32, // path iteration change per edit
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: REFERENCE_G,
            velocity_step: 0.1,
            iteration_step: 10,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in grid units
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>, // initial velocity force
    pub m: f64, // mass
    #[serde(default = "white")]
    pub color: [u8; 3], // rgb
    #[serde(rename = "static", default = "default_static")]
    pub is_static: bool, // never moves, never predicted
    #[serde(default = "default_path_iterations")]
    pub path_iterations: u32, // prediction step budget
}

fn zero_vec() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

fn default_static() -> bool {
    true
}

fn default_path_iterations() -> u32 {
    50
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    /// A light mover above a heavy static attractor
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig {
                    x: vec![50.0, 10.0],
                    v: zero_vec(),
                    m: 500.0,
                    color: [0, 255, 0],
                    is_static: false,
                    path_iterations: default_path_iterations(),
                },
                BodyConfig {
                    x: vec![50.0, 50.0],
                    v: zero_vec(),
                    m: 1_600_000.0,
                    color: [255, 255, 0],
                    is_static: true,
                    path_iterations: default_path_iterations(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml_with_defaults() {
        let yaml = "
bodies:
  - x: [ 1.0, 2.0 ]
    m: 3.0
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.grid, GridConfig::default());
        assert_eq!(cfg.parameters, ParametersConfig::default());

        let b = &cfg.bodies[0];
        assert_eq!(b.v, vec![0.0, 0.0]);
        assert!(b.is_static);
        assert_eq!(b.path_iterations, 50);
        assert_eq!(b.color, [255, 255, 255]);
    }

    #[test]
    fn parses_full_body() {
        let yaml = "
grid: { width: 40, height: 30, scale: 2 }
parameters: { G: 1.0 }
bodies:
  - x: [ 5.0, 6.0 ]
    v: [ 0.5, -0.5 ]
    m: 10.0
    color: [ 1, 2, 3 ]
    static: false
    path_iterations: 7
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.grid.width, 40);
        assert_eq!(cfg.parameters.G, 1.0);
        assert_eq!(cfg.parameters.iteration_step, 10);

        let b = &cfg.bodies[0];
        assert_eq!(b.v, vec![0.5, -0.5]);
        assert!(!b.is_static);
        assert_eq!(b.path_iterations, 7);
    }
}
