//! Gravity and path vector computation for the orbit simulation
//!
//! `NewtonianGravity` sums pairwise pulls into each body's resultant
//! `GravityForce`; `compose_path_vectors` adds each body's velocity force
//! on top to get its instantaneous travel direction.

use bevy::log::trace;

use crate::simulation::angle::{cartesian, heading};
use crate::simulation::error::GravityError;
use crate::simulation::states::{Body, GravityForce, NVec2};

/// Direct O(n^2) gravity on the simulation grid
///
/// Distances are truncated to whole cells and the pull falls off as
/// `1 / distance`, not `1 / distance^2`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Recompute `gravity_force` for every body in `bodies`
    ///
    /// Fails with [`GravityError::Coincident`] as soon as two bodies are
    /// less than one cell apart. Results are committed only after every
    /// body has been solved, so on failure no body is touched.
    /// Fewer than two bodies is a no-op.
    pub fn solve(&self, bodies: &mut [Body]) -> Result<(), GravityError> {
        let n = bodies.len();
        if n < 2 {
            return Ok(());
        }

        let mut resultants = Vec::with_capacity(n);

        for i in 0..n {
            let bi = &bodies[i];
            let mut sum = NVec2::zeros();

            for j in 0..n {
                if j == i {
                    continue;
                }
                let bj = &bodies[j];

                // offset from j to i, heading() turns it into the pull on i
                let r = bi.x - bj.x;
                let distance = r.norm().floor();
                if distance == 0.0 {
                    return Err(GravityError::Coincident { first: i, second: j });
                }

                let f = (bi.m * bj.m / distance) * self.G;
                let direction = heading(r.x, r.y);

                trace!(
                    i, j, mass_i = bi.m, mass_j = bj.m, distance, force = f, direction,
                    "pairwise gravity"
                );

                let (fx, fy) = cartesian(f, direction);
                sum += NVec2::new(fx, fy);
            }

            let resultant = GravityForce {
                vector: sum,
                magnitude: sum.norm(),
                direction: heading(sum.x, sum.y),
            };
            trace!(
                i, gx = sum.x, gy = sum.y, magnitude = resultant.magnitude,
                direction = resultant.direction, "resultant gravity"
            );
            resultants.push(resultant);
        }

        for (body, force) in bodies.iter_mut().zip(resultants) {
            body.gravity_force = force;
        }
        Ok(())
    }
}

/// Set each body's path vector to gravity force + velocity force
pub fn compose_path_vectors(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        b.path_vector = b.gravity_force.vector + b.velocity_force;
    }
}
