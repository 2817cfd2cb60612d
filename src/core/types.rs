//! Core type definitions: points, datasets, hyperplanes and training traces

use crate::core::{Result, SvmTraceError};
use serde::{Deserialize, Serialize};

/// Binary class label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Numeric value used in the update rule (-1.0 or +1.0)
    pub fn value(self) -> f64 {
        match self {
            Label::Negative => -1.0,
            Label::Positive => 1.0,
        }
    }

    /// Integer value used when rendering (-1 or 1)
    pub fn as_i32(self) -> i32 {
        match self {
            Label::Negative => -1,
            Label::Positive => 1,
        }
    }

    /// Label for a decision value; zero goes to the positive class
    pub fn from_decision(decision_value: f64) -> Self {
        if decision_value >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = SvmTraceError;

    fn try_from(value: f64) -> Result<Self> {
        if value == 1.0 {
            Ok(Label::Positive)
        } else if value == -1.0 {
            Ok(Label::Negative)
        } else {
            Err(SvmTraceError::InvalidLabel(value))
        }
    }
}

impl TryFrom<i32> for Label {
    type Error = SvmTraceError;

    fn try_from(value: i32) -> Result<Self> {
        Label::try_from(f64::from(value))
    }
}

/// A labeled point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }
}

/// Ordered collection of labeled points
///
/// A dataset built through [`Dataset::new`] is not required to hold both
/// classes; the trainer checks that before fitting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Wrap a vector of points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points in order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Count of (negative, positive) labels
    pub fn label_counts(&self) -> (usize, usize) {
        let positive = self
            .points
            .iter()
            .filter(|p| p.label == Label::Positive)
            .count();
        (self.points.len() - positive, positive)
    }

    /// True when both -1 and +1 labels occur
    pub fn has_both_classes(&self) -> bool {
        let (negative, positive) = self.label_counts();
        negative > 0 && positive > 0
    }
}

impl From<Vec<Point>> for Dataset {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class label
    pub label: Label,
    /// Raw decision function value
    pub decision_value: f64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: Label, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Get confidence as absolute value of decision value
    pub fn confidence(&self) -> f64 {
        self.decision_value.abs()
    }
}

/// Linear decision boundary `w1*x + w2*y + b = 0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hyperplane {
    pub w1: f64,
    pub w2: f64,
    pub b: f64,
}

impl Hyperplane {
    /// Create a hyperplane from its coefficients
    pub fn new(w1: f64, w2: f64, b: f64) -> Self {
        Self { w1, w2, b }
    }

    /// The all-zero hyperplane training starts from
    pub fn zero() -> Self {
        Self::default()
    }

    /// Raw decision value `w·p + b`
    pub fn decision_function(&self, point: &Point) -> f64 {
        self.w1 * point.x + self.w2 * point.y + self.b
    }

    /// Signed margin `label * (w·p + b)`
    pub fn margin(&self, point: &Point) -> f64 {
        point.label.value() * self.decision_function(point)
    }

    /// Hinge loss `max(0, 1 - margin)`
    pub fn hinge_loss(&self, point: &Point) -> f64 {
        (1.0 - self.margin(point)).max(0.0)
    }

    /// Average hinge loss over a set of points (0 for an empty set)
    pub fn mean_hinge_loss(&self, points: &[Point]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        points.iter().map(|p| self.hinge_loss(p)).sum::<f64>() / points.len() as f64
    }

    /// Squared L2 norm of the weight vector
    pub fn norm_squared(&self) -> f64 {
        self.w1 * self.w1 + self.w2 * self.w2
    }
}

/// Hyperplanes recorded after each completed epoch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingTrace {
    planes: Vec<Hyperplane>,
}

impl TrainingTrace {
    /// Create an empty trace with room for `epochs` entries
    pub fn with_capacity(epochs: usize) -> Self {
        Self {
            planes: Vec::with_capacity(epochs),
        }
    }

    pub(crate) fn push(&mut self, plane: Hyperplane) {
        self.planes.push(plane);
    }

    /// Number of recorded epochs
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// All recorded hyperplanes, epoch 1 first
    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    /// Hyperplane after the first epoch
    pub fn first(&self) -> Option<&Hyperplane> {
        self.planes.first()
    }

    /// Hyperplane after the final epoch
    pub fn last(&self) -> Option<&Hyperplane> {
        self.planes.last()
    }
}

impl<'a> IntoIterator for &'a TrainingTrace {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

/// How the per-epoch visiting order is randomised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShufflePolicy {
    /// Epoch `e` (0-based) shuffles with a fresh source seeded by `seed + e`
    #[default]
    ReseedPerEpoch,
    /// One source seeded once per training run, advanced across epochs
    SingleStream,
}

/// Configuration for the SGD trainer
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// L2 regularization strength
    pub alpha: f64,
    /// Constant learning rate
    pub eta0: f64,
    /// Shuffle the visiting order every epoch
    pub shuffle: bool,
    /// Seed for the shuffling source
    pub seed: u64,
    /// How the shuffling source is seeded across epochs
    pub shuffle_policy: ShufflePolicy,
    /// Epochs between progress log lines (0 disables them)
    pub log_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            alpha: 1e-4,
            eta0: 0.01,
            shuffle: true,
            seed: 42,
            shuffle_policy: ShufflePolicy::ReseedPerEpoch,
            log_interval: 10,
        }
    }
}

impl TrainerConfig {
    /// Check hyperparameter ranges
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "alpha must be finite and non-negative, got: {}",
                self.alpha
            )));
        }
        if !self.eta0.is_finite() || self.eta0 <= 0.0 {
            return Err(SvmTraceError::InvalidArgument(format!(
                "eta0 must be finite and positive, got: {}",
                self.eta0
            )));
        }
        Ok(())
    }
}
