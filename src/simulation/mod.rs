pub mod states;
pub mod params;
pub mod angle;
pub mod error;
pub mod forces;
pub mod predictor;
pub mod engine;
pub mod scenario;
