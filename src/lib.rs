//! Online SGD training of a linear hinge-loss SVM on synthetic 2-D blobs
//!
//! Generates a seeded two-class dataset, fits a separating line with
//! constant-step stochastic subgradient descent, records the hyperplane after
//! every epoch, and renders points and hyperplanes as source-code literals.

pub mod api;
pub mod config;
pub mod core;
pub mod data;
pub mod optimizer;
pub mod render;
pub mod solver;

// Re-export main types for convenience
pub use crate::api::{TrainedModel, SVM};
pub use crate::config::RunConfig;
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, SvmTraceError};
pub use crate::data::{generate, BlobGenerator};
pub use crate::optimizer::{train, IncrementalSvm, SgdTrainer};
pub use crate::render::{render_dataset, render_trace, CppTarget, LiteralTarget, PythonTarget};
pub use crate::solver::HingeSgdSolver;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
