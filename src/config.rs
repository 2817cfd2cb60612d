//! Run configuration
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes. The CLI applies its flags on top of the loaded configuration.

use crate::core::{Result, ShufflePolicy, SvmTraceError, TrainerConfig};
use crate::data::BlobGenerator;
use crate::render::{target_by_name, LiteralTarget};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters for one generate-train-render run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub n_points: usize,
    pub n_epochs: usize,
    pub seed: u64,
    pub n_clusters: usize,
    pub cluster_std: f64,
    pub alpha: f64,
    pub eta0: f64,
    pub shuffle: bool,
    pub shuffle_policy: ShufflePolicy,
    /// Literal target name: `cpp` or `python`
    pub target: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_points: 400,
            n_epochs: 400,
            seed: 42,
            n_clusters: 2,
            cluster_std: 1.8,
            alpha: 1e-4,
            eta0: 0.01,
            shuffle: true,
            shuffle_policy: ShufflePolicy::ReseedPerEpoch,
            target: "cpp".to_string(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmTraceError::IoError)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| SvmTraceError::ParseError(e.to_string()))
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SvmTraceError::ParseError(e.to_string()))
    }

    /// Check every parameter before any computation starts
    pub fn validate(&self) -> Result<()> {
        if self.n_epochs < 1 {
            return Err(SvmTraceError::InvalidArgument(
                "n_epochs must be at least 1".to_string(),
            ));
        }
        if self.n_clusters < 2 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "n_clusters must be at least 2, got: {}",
                self.n_clusters
            )));
        }
        if self.n_points < self.n_clusters {
            return Err(SvmTraceError::InvalidArgument(format!(
                "n_points ({}) must be at least n_clusters ({})",
                self.n_points, self.n_clusters
            )));
        }
        if !self.cluster_std.is_finite() || self.cluster_std <= 0.0 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "cluster_std must be finite and positive, got: {}",
                self.cluster_std
            )));
        }
        self.trainer_config().validate()?;
        self.literal_target()?;
        Ok(())
    }

    /// Generator described by this configuration
    pub fn generator(&self) -> BlobGenerator {
        BlobGenerator::new(self.n_points)
            .with_seed(self.seed)
            .with_clusters(self.n_clusters)
            .with_cluster_std(self.cluster_std)
    }

    /// Trainer settings described by this configuration
    pub fn trainer_config(&self) -> TrainerConfig {
        TrainerConfig {
            alpha: self.alpha,
            eta0: self.eta0,
            shuffle: self.shuffle,
            seed: self.seed,
            shuffle_policy: self.shuffle_policy,
            ..TrainerConfig::default()
        }
    }

    /// Literal target named by this configuration
    pub fn literal_target(&self) -> Result<Box<dyn LiteralTarget>> {
        target_by_name(&self.target).ok_or_else(|| {
            SvmTraceError::InvalidArgument(format!(
                "Unsupported target: {}. Use 'cpp' or 'python'",
                self.target
            ))
        })
    }
}
