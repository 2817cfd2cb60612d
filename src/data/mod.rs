//! Synthetic dataset generation
//!
//! This module provides the seeded Gaussian blob generator that feeds
//! the trainer.

pub mod blobs;

pub use self::blobs::*;
