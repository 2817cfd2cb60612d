//! Stochastic subgradient step for the L2-regularized hinge loss
//!
//! For a point `(x, label)` and the objective
//! `alpha * ||w||^2 / 2 + max(0, 1 - label * (w·x + b))`, one step with the
//! constant learning rate `eta0` is:
//!
//! - margin violated (`label * (w·x + b) < 1`):
//!   `w <- w - eta0 * (alpha * w - label * x)`, `b <- b + eta0 * label`
//! - otherwise only the regularization shrinkage applies:
//!   `w <- w - eta0 * alpha * w`
//!
//! The solver holds no model state. Each call takes the current hyperplane
//! by value and returns the updated one.

use crate::core::{Hyperplane, Point, TrainerConfig};

/// Constant-step SGD solver for the hinge loss
#[derive(Debug, Clone, Copy)]
pub struct HingeSgdSolver {
    alpha: f64,
    eta0: f64,
}

impl HingeSgdSolver {
    /// Create a solver from the trainer configuration
    pub fn new(config: &TrainerConfig) -> Self {
        Self {
            alpha: config.alpha,
            eta0: config.eta0,
        }
    }

    /// Regularization strength
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Learning rate
    pub fn eta0(&self) -> f64 {
        self.eta0
    }

    /// Apply one update for a single point
    pub fn step(&self, plane: Hyperplane, point: &Point) -> Hyperplane {
        let y = point.label.value();

        if plane.margin(point) < 1.0 {
            Hyperplane {
                w1: plane.w1 - self.eta0 * (self.alpha * plane.w1 - y * point.x),
                w2: plane.w2 - self.eta0 * (self.alpha * plane.w2 - y * point.y),
                b: plane.b + self.eta0 * y,
            }
        } else {
            Hyperplane {
                w1: plane.w1 - self.eta0 * self.alpha * plane.w1,
                w2: plane.w2 - self.eta0 * self.alpha * plane.w2,
                b: plane.b,
            }
        }
    }

    /// One pass over `points` in the given visiting order
    ///
    /// # Panics
    /// Panics if an index in `order` is out of bounds for `points`
    pub fn epoch(&self, plane: Hyperplane, points: &[Point], order: &[usize]) -> Hyperplane {
        order
            .iter()
            .fold(plane, |current, &i| self.step(current, &points[i]))
    }
}
