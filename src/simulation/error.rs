//! Error types for the simulation core.
//!
//! Nothing here is fatal to a running viewer: a `GravityError` skips one
//! force update, a `SimError` rejects one operator edit.

use thiserror::Error;

/// Gravity solve aborted on degenerate input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GravityError {
    #[error("bodies {first} and {second} are less than one cell apart")]
    Coincident { first: usize, second: usize },
}

/// Scenario configuration that cannot be turned into a runtime scenario
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("body {body}: `{field}` needs 2 components, got {got}")]
    Dimension { body: usize, field: &'static str, got: usize },

    #[error("body {body}: mass must be finite and non-negative, got {mass}")]
    Mass { body: usize, mass: f64 },

    #[error("grid width, height and scale must be positive")]
    Grid,
}

/// Rejected boundary operation on a `Simulation`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("no body with index {0}")]
    UnknownBody(usize),

    #[error("body {0} is not selected")]
    NotSelected(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
