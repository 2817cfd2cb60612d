//! High-level API for generating blobs and tracing an SGD-trained SVM
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use svmtrace::api::SVM;
//! use svmtrace::data::generate;
//! use svmtrace::render::{render_trace, CppTarget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = generate(400, 42, 2, 1.8)?;
//!
//! let model = SVM::new()
//!     .with_alpha(1e-4)
//!     .with_eta0(0.01)
//!     .with_epochs(400)
//!     .train(&dataset)?;
//!
//! println!("{}", render_trace(&CppTarget, model.trace()));
//! # Ok(())
//! # }
//! ```

use crate::config::RunConfig;
use crate::core::{
    Classifier, Dataset, Hyperplane, Result, ShufflePolicy, SvmTraceError, TrainerConfig,
    TrainingTrace,
};
use crate::optimizer::SgdTrainer;

/// High-level SVM interface with builder pattern
#[derive(Debug, Clone)]
pub struct SVM {
    config: TrainerConfig,
    n_epochs: usize,
}

impl SVM {
    /// Default hyperparameters and 400 epochs
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            n_epochs: 400,
        }
    }

    /// Start from an existing trainer configuration
    pub fn with_config(config: TrainerConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Set L2 regularization strength
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the constant learning rate
    pub fn with_eta0(mut self, eta0: f64) -> Self {
        self.config.eta0 = eta0;
        self
    }

    /// Set the shuffling seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Enable or disable per-epoch shuffling
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    /// Set how the shuffling source is seeded across epochs
    pub fn with_shuffle_policy(mut self, policy: ShufflePolicy) -> Self {
        self.config.shuffle_policy = policy;
        self
    }

    /// Set the number of epochs
    pub fn with_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }

    /// Train on a dataset
    pub fn train(self, dataset: &Dataset) -> Result<TrainedModel> {
        let trace = SgdTrainer::new(self.config).train(dataset, self.n_epochs)?;
        TrainedModel::from_trace(trace)
    }
}

impl Default for SVM {
    fn default() -> Self {
        Self::new()
    }
}

/// Final hyperplane plus the per-epoch trace that led to it
#[derive(Debug, Clone)]
pub struct TrainedModel {
    plane: Hyperplane,
    trace: TrainingTrace,
}

impl TrainedModel {
    fn from_trace(trace: TrainingTrace) -> Result<Self> {
        let plane = trace.last().copied().ok_or_else(|| {
            SvmTraceError::InvalidArgument("training produced no epochs".to_string())
        })?;
        Ok(Self { plane, trace })
    }

    /// Hyperplanes recorded after each epoch
    pub fn trace(&self) -> &TrainingTrace {
        &self.trace
    }

    /// Take ownership of the trace
    pub fn into_trace(self) -> TrainingTrace {
        self.trace
    }

    /// Mean hinge loss of the final hyperplane over a dataset
    pub fn mean_hinge_loss(&self, dataset: &Dataset) -> f64 {
        self.plane.mean_hinge_loss(dataset.points())
    }
}

impl Classifier for TrainedModel {
    fn hyperplane(&self) -> Hyperplane {
        self.plane
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::data::BlobGenerator;

    /// 400 points, seed 42, two clusters, σ = 1.8
    pub fn generate_default() -> Result<Dataset> {
        BlobGenerator::new(400)
            .with_seed(42)
            .with_cluster_std(1.8)
            .generate()
    }

    /// Train for 400 epochs with default hyperparameters
    pub fn train_default(dataset: &Dataset) -> Result<TrainedModel> {
        SVM::new().train(dataset)
    }

    /// Generate and train as described by a run configuration
    pub fn run(config: &RunConfig) -> Result<(Dataset, TrainingTrace)> {
        config.validate()?;
        let dataset = config.generator().generate()?;
        let trace = SgdTrainer::new(config.trainer_config()).train(&dataset, config.n_epochs)?;
        Ok((dataset, trace))
    }
}
