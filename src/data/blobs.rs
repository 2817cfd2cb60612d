//! Gaussian blob generator
//!
//! Produces labeled 2-D points scattered around well-separated cluster
//! centres. Clusters are labeled by index parity: even clusters are `-1`,
//! odd clusters are `+1`, so the two-cluster case yields one blob per class.
//!
//! All randomness (centre placement, jitter and the final shuffle) is drawn
//! from a single [`StdRng`] seeded with the configured seed, so identical
//! parameters always produce an identical dataset.

use crate::core::{Dataset, Label, Point, Result, SvmTraceError};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};
use std::f64::consts::PI;

/// Half-width of the square the cluster anchor is drawn from
pub const CENTER_BOX: f64 = 10.0;

/// Minimum distance between adjacent centres, in cluster standard deviations
pub const MIN_SEPARATION_STDS: f64 = 6.0;

/// Builder for synthetic blob datasets
#[derive(Debug, Clone)]
pub struct BlobGenerator {
    n_samples: usize,
    n_clusters: usize,
    cluster_std: f64,
    seed: u64,
    shuffle: bool,
}

impl BlobGenerator {
    /// Two clusters, σ = 1.0, seed 0, shuffled output
    pub fn new(n_samples: usize) -> Self {
        Self {
            n_samples,
            n_clusters: 2,
            cluster_std: 1.0,
            seed: 0,
            shuffle: true,
        }
    }

    /// Set the seed for every random draw
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of clusters
    pub fn with_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Set the per-coordinate standard deviation of each cluster
    pub fn with_cluster_std(mut self, cluster_std: f64) -> Self {
        self.cluster_std = cluster_std;
        self
    }

    /// Shuffle points after generation (on by default)
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_clusters < 2 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "n_clusters must be at least 2, got: {}",
                self.n_clusters
            )));
        }
        if self.n_samples < self.n_clusters {
            return Err(SvmTraceError::InvalidArgument(format!(
                "n_samples ({}) must be at least n_clusters ({})",
                self.n_samples, self.n_clusters
            )));
        }
        if !self.cluster_std.is_finite() || self.cluster_std <= 0.0 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "cluster_std must be finite and positive, got: {}",
                self.cluster_std
            )));
        }
        Ok(())
    }

    /// Points per cluster; the remainder goes to the first clusters
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let base = self.n_samples / self.n_clusters;
        let extra = self.n_samples % self.n_clusters;
        (0..self.n_clusters)
            .map(|k| if k < extra { base + 1 } else { base })
            .collect()
    }

    /// Generate the dataset
    pub fn generate(&self) -> Result<Dataset> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let centers = self.place_centers(&mut rng)?;
        for (k, (cx, cy)) in centers.iter().enumerate() {
            debug!("Cluster {k} centre: ({cx:.4}, {cy:.4})");
        }

        let jitter = Normal::new(0.0, self.cluster_std)
            .map_err(|e| SvmTraceError::InvalidArgument(e.to_string()))?;

        let mut points = Vec::with_capacity(self.n_samples);
        for (k, (&(cx, cy), size)) in centers.iter().zip(self.cluster_sizes()).enumerate() {
            let label = cluster_label(k);
            for _ in 0..size {
                let x = cx + jitter.sample(&mut rng);
                let y = cy + jitter.sample(&mut rng);
                points.push(Point::new(x, y, label));
            }
        }

        if self.shuffle {
            points.shuffle(&mut rng);
        }

        let dataset = Dataset::new(points);
        let (negative, positive) = dataset.label_counts();
        info!(
            "Generated {} points in {} clusters (-1: {negative}, +1: {positive})",
            dataset.len(),
            self.n_clusters
        );
        Ok(dataset)
    }

    /// Centres on a randomly rotated circle around a random anchor, with
    /// adjacent centres at least `MIN_SEPARATION_STDS * cluster_std` apart
    fn place_centers(&self, rng: &mut StdRng) -> Result<Vec<(f64, f64)>> {
        let to_invalid = |e: rand_distr::uniform::Error| SvmTraceError::InvalidArgument(e.to_string());

        let anchor = Uniform::new(-CENTER_BOX, CENTER_BOX).map_err(to_invalid)?;
        let angle = Uniform::new(0.0, 2.0 * PI).map_err(to_invalid)?;
        let spread = Uniform::new(1.0, 1.5).map_err(to_invalid)?;

        let ax = anchor.sample(rng);
        let ay = anchor.sample(rng);
        let rotation = angle.sample(rng);
        let factor = spread.sample(rng);

        let k = self.n_clusters as f64;
        let min_separation = MIN_SEPARATION_STDS * self.cluster_std;
        // Adjacent chord of a regular K-gon: 2 R sin(pi / K)
        let radius = min_separation * factor / (2.0 * (PI / k).sin());

        Ok((0..self.n_clusters)
            .map(|i| {
                let theta = rotation + 2.0 * PI * i as f64 / k;
                (ax + radius * theta.cos(), ay + radius * theta.sin())
            })
            .collect())
    }
}

fn cluster_label(cluster: usize) -> Label {
    if cluster % 2 == 0 {
        Label::Negative
    } else {
        Label::Positive
    }
}

/// Generate `n` points in `n_clusters` blobs of spread `cluster_std`
pub fn generate(n: usize, seed: u64, n_clusters: usize, cluster_std: f64) -> Result<Dataset> {
    BlobGenerator::new(n)
        .with_seed(seed)
        .with_clusters(n_clusters)
        .with_cluster_std(cluster_std)
        .generate()
}
