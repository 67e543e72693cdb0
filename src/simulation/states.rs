//! Core state types for the orbit simulation.
//!
//! Defines the 2D body entity and its derived vectors:
//! - `Body` holds position, mass, flags and the three force-like vectors
//! - `GravityForce` is the resultant pull, with magnitude and heading
//! - `Cell` is an integer grid cell visited by the trajectory predictor
//!
//! Real bodies and pathfinders share the same `Body` type.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Resultant gravitational force acting on a body
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GravityForce {
    pub vector: NVec2, // cartesian components (gx, gy)
    pub magnitude: f64, // |(gx, gy)|
    pub direction: f64, // heading in degrees, see `angle::heading`
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position, grid units
    pub m: f64, // mass
    pub color: [u8; 3], // rgb, display only
    pub is_static: bool, // never moves, never predicted
    pub selected: bool, // interaction flag
    pub path_iterations: u32, // prediction step budget
    pub velocity_force: NVec2, // operator-set kick
    pub gravity_force: GravityForce, // derived every solve
    pub path_vector: NVec2, // derived: gravity + velocity
}

impl Body {
    pub fn new(x: NVec2, m: f64) -> Self {
        Self {
            x,
            m,
            color: [255, 255, 255],
            is_static: true,
            selected: false,
            path_iterations: 50,
            velocity_force: NVec2::zeros(),
            gravity_force: GravityForce::default(),
            path_vector: NVec2::zeros(),
        }
    }

    /// Copy every field from `source` except the prediction budget.
    ///
    /// Used to resynchronize a pathfinder with its real body.
    pub fn sync_from(&mut self, source: &Body) {
        self.x = source.x;
        self.m = source.m;
        self.color = source.color;
        self.is_static = source.is_static;
        self.selected = source.selected;
        self.velocity_force = source.velocity_force;
        self.gravity_force = source.gravity_force;
        self.path_vector = source.path_vector;
    }
}

/// Grid cell marked as visited during prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Nearest cell to a real-valued grid position
    pub fn from_position(p: NVec2) -> Self {
        Self {
            x: p.x.round() as i64,
            y: p.y.round() as i64,
        }
    }
}
