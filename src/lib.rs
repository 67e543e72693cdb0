pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Cell, GravityForce, NVec2};
pub use simulation::angle::heading;
pub use simulation::forces::{compose_path_vectors, NewtonianGravity};
pub use simulation::predictor::{CellSink, PassDirection, PassReport, PredictionReport, Termination, TrajectoryPredictor};
pub use simulation::engine::{BodyView, FrameReport, RenderState, Simulation};
pub use simulation::error::{ConfigError, GravityError, SimError};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{GridConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::orbit_vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_prediction};
