//! Core traits

use crate::core::{Hyperplane, Label, Point, Prediction};

/// A fitted linear classifier over 2-D points
pub trait Classifier: Send + Sync {
    /// Current decision boundary
    fn hyperplane(&self) -> Hyperplane;

    /// Predict a single point
    fn predict(&self, point: &Point) -> Prediction {
        let decision_value = self.hyperplane().decision_function(point);
        Prediction::new(Label::from_decision(decision_value), decision_value)
    }

    /// Predict multiple points
    fn predict_batch(&self, points: &[Point]) -> Vec<Prediction> {
        let plane = self.hyperplane();
        points
            .iter()
            .map(|p| {
                let decision_value = plane.decision_function(p);
                Prediction::new(Label::from_decision(decision_value), decision_value)
            })
            .collect()
    }

    /// Get the bias term
    fn bias(&self) -> f64 {
        self.hyperplane().b
    }
}

impl Classifier for Hyperplane {
    fn hyperplane(&self) -> Hyperplane {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperplane_as_classifier() {
        let plane = Hyperplane::new(1.0, 0.0, -1.0);

        let right = plane.predict(&Point::new(3.0, 0.0, Label::Positive));
        assert_eq!(right.label, Label::Positive);
        assert_eq!(right.decision_value, 2.0);

        let left = plane.predict(&Point::new(-1.0, 5.0, Label::Negative));
        assert_eq!(left.label, Label::Negative);
        assert_eq!(left.confidence(), 2.0);

        assert_eq!(plane.bias(), -1.0);

        let batch = plane.predict_batch(&[
            Point::new(3.0, 0.0, Label::Positive),
            Point::new(-1.0, 0.0, Label::Negative),
        ]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].label, Label::Positive);
        assert_eq!(batch[1].label, Label::Negative);
    }
}
