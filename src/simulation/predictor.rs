//! Trajectory prediction without time integration.
//!
//! Each moving body gets a shadow "pathfinder" that walks the grid one
//! cell at a time along the dominant axis of its path vector. After every
//! step gravity is re-solved and the velocity force is turned so that the
//! angle between velocity and gravity stays what it was at the start of
//! the walk. Two walks are made per mover: one seeded with its velocity
//! force, one seeded with the negated velocity force.
//!
//! This is a heading-preserving heuristic, not an orbit integrator.

use bevy::log::debug;

use crate::simulation::angle::{cartesian, heading};
use crate::simulation::forces::{compose_path_vectors, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Cell, NVec2};

/// Index of the body whose 1-cell neighbourhood stops a walk.
///
/// Only meaningful for the two-body layout; a general stopping rule for
/// more bodies does not exist.
pub const ATTRACTOR_INDEX: usize = 1;

/// Slope used in place of a division by zero
const VERTICAL_SLOPE: f64 = 40.0;

/// Receiver for cells visited during prediction
pub trait CellSink {
    fn mark(&mut self, cell: Cell);
}

impl CellSink for Vec<Cell> {
    fn mark(&mut self, cell: Cell) {
        self.push(cell);
    }
}

/// Which seed a pass was run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassDirection {
    Forward, // +velocity force
    Reverse, // -velocity force
}

impl PassDirection {
    fn sign(self) -> f64 {
        match self {
            PassDirection::Forward => 1.0,
            PassDirection::Reverse => -1.0,
        }
    }
}

/// Why a pass stopped walking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    IterationBudget,
    LeftGrid,
    ReachedAttractor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassReport {
    pub body: usize,
    pub direction: PassDirection,
    pub steps: u32,
    pub termination: Termination,
}

/// Outcome of one `predict` call, one entry per pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionReport {
    pub passes: Vec<PassReport>,
}

impl PredictionReport {
    pub fn total_steps(&self) -> u64 {
        self.passes.iter().map(|p| p.steps as u64).sum()
    }
}

/// Owns the pathfinder set, index-aligned with the real bodies
#[derive(Debug, Clone)]
pub struct TrajectoryPredictor {
    pathfinders: Vec<Body>,
    gravity: NewtonianGravity,
}

impl TrajectoryPredictor {
    /// Shadow copy of `bodies`, including their prediction budgets
    pub fn new(bodies: &[Body], gravity: NewtonianGravity) -> Self {
        Self {
            pathfinders: bodies.to_vec(),
            gravity,
        }
    }

    pub fn pathfinders(&self) -> &[Body] {
        &self.pathfinders
    }

    /// Prediction budget of the pathfinder shadowing body `index`
    pub fn path_iterations(&self, index: usize) -> Option<u32> {
        self.pathfinders.get(index).map(|p| p.path_iterations)
    }

    pub fn set_path_iterations(&mut self, index: usize, iterations: u32) -> bool {
        match self.pathfinders.get_mut(index) {
            Some(p) => {
                p.path_iterations = iterations;
                true
            }
            None => false,
        }
    }

    /// Walk every non-static body forward and backward, marking cells in `sink`
    pub fn predict(
        &mut self,
        bodies: &[Body],
        params: &Parameters,
        sink: &mut impl CellSink,
    ) -> PredictionReport {
        // bodies added or removed since construction
        if self.pathfinders.len() != bodies.len() {
            let budgets: Vec<u32> = self.pathfinders.iter().map(|p| p.path_iterations).collect();
            self.pathfinders = bodies.to_vec();
            for (p, budget) in self.pathfinders.iter_mut().zip(budgets) {
                p.path_iterations = budget;
            }
        }

        let mut report = PredictionReport::default();

        for k in 0..bodies.len() {
            if bodies[k].is_static {
                continue;
            }
            for direction in [PassDirection::Forward, PassDirection::Reverse] {
                self.resync(bodies);
                let pass = self.run_pass(k, direction, bodies, params, sink);
                debug!(
                    body = k, ?direction, steps = pass.steps, termination = ?pass.termination,
                    "prediction pass finished"
                );
                report.passes.push(pass);
            }
        }

        report
    }

    /// Copy all fields except the prediction budget from the real bodies
    fn resync(&mut self, bodies: &[Body]) {
        for (p, b) in self.pathfinders.iter_mut().zip(bodies) {
            p.sync_from(b);
        }
    }

    fn solve(&mut self) {
        if let Err(e) = self.gravity.solve(&mut self.pathfinders) {
            // forces stay as they were for this step
            debug!(%e, "pathfinder gravity solve skipped");
        }
    }

    fn run_pass(
        &mut self,
        k: usize,
        direction: PassDirection,
        bodies: &[Body],
        params: &Parameters,
        sink: &mut impl CellSink,
    ) -> PassReport {
        self.solve();
        compose_path_vectors(&mut self.pathfinders);

        // the first step still uses the path vector composed above
        let seed = bodies[k].velocity_force * direction.sign();
        self.pathfinders[k].velocity_force = seed;
        let vf_direction = heading(seed.x, seed.y);
        let delta_angle = vf_direction - self.pathfinders[k].gravity_force.direction;
        let vf_magnitude = seed.norm();

        let attractor = bodies.get(ATTRACTOR_INDEX).map(|a| a.x);
        let budget = self.pathfinders[k].path_iterations;

        let mut walker = self.pathfinders[k].x;
        let mut steps = 0;

        let termination = loop {
            if !params.inside_grid(walker.x, walker.y) {
                break Termination::LeftGrid;
            }
            if steps >= budget {
                break Termination::IterationBudget;
            }
            if let Some(a) = attractor {
                if a.x - 1.0 < walker.x && walker.x < a.x + 1.0
                    && a.y - 1.0 < walker.y && walker.y < a.y + 1.0
                {
                    break Termination::ReachedAttractor;
                }
            }

            walker = grid_step(walker, self.pathfinders[k].x, self.pathfinders[k].path_vector);
            self.pathfinders[k].x = walker;
            sink.mark(Cell::from_position(walker));

            self.solve();

            let p = &mut self.pathfinders[k];
            let (vx, vy) = cartesian(vf_magnitude, p.gravity_force.direction - delta_angle);
            p.velocity_force = NVec2::new(vx, vy);

            compose_path_vectors(&mut self.pathfinders);
            steps += 1;
        };

        PassReport {
            body: k,
            direction,
            steps,
            termination,
        }
    }
}

/// Advance `walker` one cell along the dominant axis of `path`
///
/// `origin` is the pathfinder position the line is drawn from; the
/// minor axis coordinate is recomputed from the slope rather than
/// accumulated.
pub fn grid_step(walker: NVec2, origin: NVec2, path: NVec2) -> NVec2 {
    let m = if path.x == 0.0 { VERTICAL_SLOPE } else { path.y / path.x };

    if -1.0 < m && m < 1.0 {
        let x = if path.x < 0.0 { walker.x - 1.0 } else { walker.x + 1.0 };
        let y = m * (x - origin.x) + origin.y;
        NVec2::new(x, y)
    } else {
        let m = if path.y == 0.0 { VERTICAL_SLOPE } else { path.x / path.y };
        let y = if path.y < 0.0 { walker.y - 1.0 } else { walker.y + 1.0 };
        let x = origin.x + m * (y - origin.y);
        NVec2::new(x, y)
    }
}
