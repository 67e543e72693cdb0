//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - grid size and display scale,
//! - gravitational constant `G`,
//! - operator edit steps for velocity and prediction depth

/// Reference gravitational constant of the simulation grid
pub const REFERENCE_G: f64 = 6.67e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub grid_width: u32, // cells along x
    pub grid_height: u32, // cells along y
    pub scale: u32, // screen pixels per cell
    pub G: f64, // gravitational constant
    pub velocity_step: f64, // velocity edit per keystroke, before scaling
    pub iteration_step: u32, // path iteration edit per keystroke
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            scale: 5,
            G: REFERENCE_G,
            velocity_step: 0.1,
            iteration_step: 10,
        }
    }
}

impl Parameters {
    /// True while `(x, y)` is still below the grid's upper bounds.
    ///
    /// There is no lower bound; walkers may drift to negative coordinates.
    pub fn inside_grid(&self, x: f64, y: f64) -> bool {
        x < self.grid_width as f64 && y < self.grid_height as f64
    }
}
