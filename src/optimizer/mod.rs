//! Epoch-level training for the linear hinge-loss SVM
//!
//! [`IncrementalSvm`] owns the evolving hyperplane and performs one full
//! pass per [`IncrementalSvm::partial_fit`] call. [`SgdTrainer`] drives it
//! for a fixed number of epochs and records the hyperplane after each one.

use crate::core::{
    Classifier, Dataset, Hyperplane, Result, ShufflePolicy, SvmTraceError, TrainerConfig,
    TrainingTrace,
};
use crate::solver::HingeSgdSolver;
use log::{debug, info, log_enabled, Level};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Reject datasets a binary linear classifier cannot be fitted to
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Err(SvmTraceError::DegenerateDataset(
            "dataset contains no points".to_string(),
        ));
    }
    if !dataset.has_both_classes() {
        let (negative, positive) = dataset.label_counts();
        return Err(SvmTraceError::DegenerateDataset(format!(
            "both labels are required, got -1: {negative}, +1: {positive}"
        )));
    }
    Ok(())
}

/// Linear SVM trained one epoch at a time
pub struct IncrementalSvm {
    solver: HingeSgdSolver,
    config: TrainerConfig,
    state: Hyperplane,
    epochs_seen: usize,
    stream: StdRng,
}

impl IncrementalSvm {
    /// Create a model with a zero hyperplane
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            solver: HingeSgdSolver::new(&config),
            stream: StdRng::seed_from_u64(config.seed),
            config,
            state: Hyperplane::zero(),
            epochs_seen: 0,
        })
    }

    /// Run one shuffled pass over the dataset and return the new hyperplane
    pub fn partial_fit(&mut self, dataset: &Dataset) -> Result<Hyperplane> {
        validate_dataset(dataset)?;
        Ok(self.fit_epoch(dataset))
    }

    pub(crate) fn fit_epoch(&mut self, dataset: &Dataset) -> Hyperplane {
        let order = self.epoch_order(dataset.len());
        self.state = self.solver.epoch(self.state, dataset.points(), &order);
        self.epochs_seen += 1;
        self.state
    }

    /// Visiting order for the next epoch
    fn epoch_order(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        if !self.config.shuffle {
            return order;
        }

        match self.config.shuffle_policy {
            ShufflePolicy::ReseedPerEpoch => {
                let seed = self.config.seed.wrapping_add(self.epochs_seen as u64);
                order.shuffle(&mut StdRng::seed_from_u64(seed));
            }
            ShufflePolicy::SingleStream => order.shuffle(&mut self.stream),
        }
        order
    }

    /// Number of completed epochs
    pub fn epochs_seen(&self) -> usize {
        self.epochs_seen
    }

    /// Configuration in use
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Back to the zero hyperplane and a freshly seeded shuffling source
    pub fn reset(&mut self) {
        self.state = Hyperplane::zero();
        self.epochs_seen = 0;
        self.stream = StdRng::seed_from_u64(self.config.seed);
    }
}

impl Classifier for IncrementalSvm {
    fn hyperplane(&self) -> Hyperplane {
        self.state
    }
}

/// Fixed-epoch trainer producing a hyperplane per epoch
#[derive(Debug, Clone, Default)]
pub struct SgdTrainer {
    config: TrainerConfig,
}

impl SgdTrainer {
    /// Create a trainer with the given configuration
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Get the trainer configuration
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Train from a zero hyperplane for exactly `n_epochs` epochs
    pub fn train(&self, dataset: &Dataset, n_epochs: usize) -> Result<TrainingTrace> {
        if n_epochs < 1 {
            return Err(SvmTraceError::InvalidArgument(
                "n_epochs must be at least 1".to_string(),
            ));
        }
        validate_dataset(dataset)?;
        let mut model = IncrementalSvm::new(self.config.clone())?;

        info!(
            "Training for {n_epochs} epochs on {} points (alpha={}, eta0={})",
            dataset.len(),
            self.config.alpha,
            self.config.eta0
        );

        let mut trace = TrainingTrace::with_capacity(n_epochs);
        for epoch in 1..=n_epochs {
            let plane = model.fit_epoch(dataset);
            trace.push(plane);

            let interval = self.config.log_interval;
            if epoch == 1 || (interval > 0 && epoch % interval == 0) {
                info!("Processed epoch {epoch:03}");
            }
            if log_enabled!(Level::Debug) {
                debug!(
                    "Epoch {epoch:03}: w=({:.8}, {:.8}) b={:.8} mean hinge loss={:.6}",
                    plane.w1,
                    plane.w2,
                    plane.b,
                    plane.mean_hinge_loss(dataset.points())
                );
            }
        }

        Ok(trace)
    }
}

/// Train with `config` for `n_epochs` epochs
pub fn train(dataset: &Dataset, n_epochs: usize, config: &TrainerConfig) -> Result<TrainingTrace> {
    SgdTrainer::new(config.clone()).train(dataset, n_epochs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Label, Point};

    fn toy_dataset() -> Dataset {
        Dataset::new(vec![
            Point::new(2.0, 1.0, Label::Positive),
            Point::new(-2.0, -1.0, Label::Negative),
            Point::new(1.5, 0.8, Label::Positive),
            Point::new(-1.5, -0.8, Label::Negative),
            Point::new(1.8, 0.9, Label::Positive),
            Point::new(-1.8, -0.9, Label::Negative),
        ])
    }

    #[test]
    fn test_trace_length_matches_epochs() {
        let trainer = SgdTrainer::default();
        for n_epochs in [1, 2, 17] {
            let trace = trainer
                .train(&toy_dataset(), n_epochs)
                .expect("Training should succeed");
            assert_eq!(trace.len(), n_epochs);
        }
    }

    #[test]
    fn test_zero_epochs_is_invalid() {
        let result = SgdTrainer::default().train(&toy_dataset(), 0);
        assert!(matches!(result, Err(SvmTraceError::InvalidArgument(_))));
    }

    #[test]
    fn test_single_class_is_degenerate() {
        let dataset = Dataset::new(vec![
            Point::new(1.0, 1.0, Label::Negative),
            Point::new(2.0, 2.0, Label::Negative),
        ]);
        let result = train(&dataset, 10, &TrainerConfig::default());
        assert!(matches!(result, Err(SvmTraceError::DegenerateDataset(_))));

        let result = train(&Dataset::default(), 10, &TrainerConfig::default());
        assert!(matches!(result, Err(SvmTraceError::DegenerateDataset(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TrainerConfig {
            eta0: -0.5,
            ..TrainerConfig::default()
        };
        let result = train(&toy_dataset(), 5, &config);
        assert!(matches!(result, Err(SvmTraceError::InvalidArgument(_))));
        assert!(IncrementalSvm::new(config).is_err());
    }

    #[test]
    fn test_training_is_reproducible() {
        for policy in [ShufflePolicy::ReseedPerEpoch, ShufflePolicy::SingleStream] {
            let config = TrainerConfig {
                shuffle_policy: policy,
                ..TrainerConfig::default()
            };
            let a = train(&toy_dataset(), 20, &config).expect("Training should succeed");
            let b = train(&toy_dataset(), 20, &config).expect("Training should succeed");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_partial_fit_matches_train() {
        let dataset = toy_dataset();
        let config = TrainerConfig::default();
        let trace = train(&dataset, 3, &config).expect("Training should succeed");

        let mut model = IncrementalSvm::new(config).expect("valid config");
        let planes: Vec<Hyperplane> = (0..3)
            .map(|_| model.partial_fit(&dataset).expect("partial fit"))
            .collect();

        assert_eq!(planes, trace.planes());
        assert_eq!(model.epochs_seen(), 3);
        assert_eq!(model.hyperplane(), planes[2]);
    }

    #[test]
    fn test_weights_carry_across_epochs() {
        let dataset = toy_dataset();
        let config = TrainerConfig::default();
        let solver = HingeSgdSolver::new(&config);
        let trace = train(&dataset, 2, &config).expect("Training should succeed");

        // Epoch 2 starts from epoch 1's hyperplane with the order seeded by seed + 1
        let mut order: Vec<usize> = (0..dataset.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(config.seed + 1));
        let expected = solver.epoch(trace.planes()[0], dataset.points(), &order);
        assert_eq!(trace.planes()[1], expected);
    }

    #[test]
    fn test_unshuffled_visits_in_dataset_order() {
        let dataset = toy_dataset();
        let config = TrainerConfig {
            shuffle: false,
            ..TrainerConfig::default()
        };
        let solver = HingeSgdSolver::new(&config);
        let trace = train(&dataset, 1, &config).expect("Training should succeed");

        let order: Vec<usize> = (0..dataset.len()).collect();
        let expected = solver.epoch(Hyperplane::zero(), dataset.points(), &order);
        assert_eq!(trace.planes()[0], expected);
    }

    #[test]
    fn test_reset_restarts_from_zero() {
        let dataset = toy_dataset();
        let mut model = IncrementalSvm::new(TrainerConfig::default()).expect("valid config");
        let first = model.partial_fit(&dataset).expect("partial fit");
        model.partial_fit(&dataset).expect("partial fit");

        model.reset();
        assert_eq!(model.epochs_seen(), 0);
        assert_eq!(model.hyperplane(), Hyperplane::zero());
        assert_eq!(model.partial_fit(&dataset).expect("partial fit"), first);
    }

    #[test]
    fn test_separates_toy_data() {
        let dataset = toy_dataset();
        let trace = SgdTrainer::default()
            .train(&dataset, 50)
            .expect("Training should succeed");
        let plane = trace.last().copied().expect("non-empty trace");

        for point in dataset.iter() {
            assert_eq!(plane.predict(point).label, point.label);
        }
    }
}
