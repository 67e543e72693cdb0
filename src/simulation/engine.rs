//! Per-frame simulation controller
//!
//! `Simulation` owns the real bodies and the trajectory predictor. Every
//! operator edit runs one full frame: solve gravity, compose path vectors,
//! predict, and keep the visited cells for display.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use crate::simulation::error::{GravityError, SimError};
use crate::simulation::forces::{compose_path_vectors, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::predictor::{PredictionReport, TrajectoryPredictor};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Cell, GravityForce, NVec2};

/// Result of one solve -> compose -> predict cycle
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub gravity: Result<(), GravityError>, // Err: forces kept from the previous frame
    pub prediction: PredictionReport,
}

/// Read-only view of one body for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub x: NVec2,
    pub color: [u8; 3],
    pub selected: bool,
    pub path_iterations: u32,
    pub gravity_force: GravityForce,
    pub velocity_force: NVec2,
    pub path_vector: NVec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub bodies: Vec<BodyView>,
    pub visited: Vec<Cell>,
}

/// Bevy resource holding the whole simulation state
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    parameters: Parameters,
    gravity: NewtonianGravity,
    bodies: Vec<Body>,
    predictor: TrajectoryPredictor,
    velocity_scale: i32,
    visited: Vec<Cell>,
}

impl Simulation {
    /// Build the controller and run the first frame
    pub fn new(scenario: Scenario) -> Self {
        let Scenario { parameters, bodies } = scenario;
        let gravity = NewtonianGravity { G: parameters.G };
        let predictor = TrajectoryPredictor::new(&bodies, gravity);

        let mut sim = Self {
            parameters,
            gravity,
            bodies,
            predictor,
            velocity_scale: 1,
            visited: Vec::new(),
        };
        sim.recompute();
        sim
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Run one frame over the current bodies
    pub fn recompute(&mut self) -> FrameReport {
        let gravity = self.gravity.solve(&mut self.bodies);
        if let Err(e) = &gravity {
            warn!(%e, "gravity solve aborted, keeping previous forces");
        }
        compose_path_vectors(&mut self.bodies);

        self.visited.clear();
        let prediction = self.predictor.predict(&self.bodies, &self.parameters, &mut self.visited);

        FrameReport { gravity, prediction }
    }

    fn body_mut(&mut self, index: usize) -> Result<&mut Body, SimError> {
        self.bodies.get_mut(index).ok_or(SimError::UnknownBody(index))
    }

    /// Move a body, e.g. while it is dragged
    pub fn set_body_position(&mut self, index: usize, x: f64, y: f64) -> Result<FrameReport, SimError> {
        self.body_mut(index)?.x = NVec2::new(x, y);
        Ok(self.recompute())
    }

    /// Add `(dvx, dvy)` to a body's velocity force
    pub fn adjust_body_velocity(&mut self, index: usize, dvx: f64, dvy: f64) -> Result<FrameReport, SimError> {
        self.body_mut(index)?.velocity_force += NVec2::new(dvx, dvy);
        Ok(self.recompute())
    }

    /// Velocity change applied by one operator edit
    pub fn velocity_step(&self) -> f64 {
        self.parameters.velocity_step * self.velocity_scale as f64
    }

    pub fn velocity_scale(&self) -> i32 {
        self.velocity_scale
    }

    /// Raise the velocity scale by one; like every operator edit, runs a frame
    pub fn increase_velocity_scale(&mut self) -> FrameReport {
        self.velocity_scale += 1;
        info!("Velocity scale: {}", self.velocity_scale);
        self.recompute()
    }

    pub fn decrease_velocity_scale(&mut self) -> FrameReport {
        self.velocity_scale -= 1;
        info!("Velocity scale: {}", self.velocity_scale);
        self.recompute()
    }

    /// Change the prediction budget of a selected body by `delta`
    ///
    /// The budget saturates at zero. Does not recompute; call
    /// [`Simulation::recompute`] once all edits of a frame are applied.
    pub fn adjust_path_iterations(&mut self, index: usize, delta: i64) -> Result<u32, SimError> {
        let body = self.body_mut(index)?;
        if !body.selected {
            return Err(SimError::NotSelected(index));
        }

        let updated = (body.path_iterations as i64).saturating_add(delta).clamp(0, u32::MAX as i64) as u32;
        body.path_iterations = updated;
        self.predictor.set_path_iterations(index, updated);

        info!("Path iteration: {}", updated);
        Ok(updated)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), SimError> {
        self.body_mut(index)?.selected = selected;
        Ok(())
    }

    pub fn toggle_selected(&mut self, index: usize) -> Result<bool, SimError> {
        let body = self.body_mut(index)?;
        body.selected = !body.selected;
        Ok(body.selected)
    }

    /// Indices of currently selected bodies
    pub fn selected(&self) -> Vec<usize> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Snapshot of everything the viewer draws
    pub fn render_state(&self) -> RenderState {
        let bodies = self
            .bodies
            .iter()
            .map(|b| BodyView {
                x: b.x,
                color: b.color,
                selected: b.selected,
                path_iterations: b.path_iterations,
                gravity_force: b.gravity_force,
                velocity_force: b.velocity_force,
                path_vector: b.path_vector,
            })
            .collect();

        RenderState {
            bodies,
            visited: self.visited.clone(),
        }
    }
}
