//! Estimator traits.
//!
//! A transform pipeline drives a model only through these entry points; it never needs
//! to know it is talking to a neural network.

use std::fmt::Debug;

use crate::{MlpClassifier, Result};

pub trait Estimator<L> {
    fn train(&mut self, samples: &[Vec<f64>], targets: &[L]) -> Result<()>;

    fn predict(&mut self, sample: &[f64]) -> Result<L>;

    fn predict_batch(&mut self, samples: &[Vec<f64>]) -> Result<Vec<L>> {
        samples.iter().map(|s| self.predict(s)).collect()
    }
}

/// An estimator that can keep learning from new samples without starting over.
pub trait IncrementalEstimator<L>: Estimator<L> {
    fn partial_train(&mut self, samples: &[Vec<f64>], targets: &[L]) -> Result<()>;
}

impl<L: Clone + PartialEq + Debug> Estimator<L> for MlpClassifier<L> {
    fn train(&mut self, samples: &[Vec<f64>], targets: &[L]) -> Result<()> {
        MlpClassifier::train(self, samples, targets).map(|_| ())
    }

    fn predict(&mut self, sample: &[f64]) -> Result<L> {
        MlpClassifier::predict(self, sample)
    }

    fn predict_batch(&mut self, samples: &[Vec<f64>]) -> Result<Vec<L>> {
        MlpClassifier::predict_batch(self, samples)
    }
}

impl<L: Clone + PartialEq + Debug> IncrementalEstimator<L> for MlpClassifier<L> {
    fn partial_train(&mut self, samples: &[Vec<f64>], targets: &[L]) -> Result<()> {
        MlpClassifier::partial_train(self, samples, targets).map(|_| ())
    }
}
