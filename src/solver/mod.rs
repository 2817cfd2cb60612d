//! SGD solver for the linear hinge-loss SVM
//!
//! This module implements the per-point stochastic subgradient update and a
//! single ordered pass over a point set. Epoch bookkeeping and shuffling live
//! in [`crate::optimizer`].

pub mod hinge;

pub use self::hinge::*;
