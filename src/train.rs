use std::fmt::Debug;

use log::{debug, trace, warn};

use crate::{Dataset, Error, MlpClassifier, Result};

/// Summary of one training call.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Passes over the samples that were run.
    pub iterations: usize,
    /// Mean of `0.5 * Σ (target - output)^2` over the samples of the last pass, measured
    /// before each sample's weight update.
    pub final_loss: f64,
}

impl<L: Clone + PartialEq + Debug> MlpClassifier<L> {
    /// Re-initializes every weight and momentum term, then trains for `iterations` passes.
    ///
    /// Samples are visited in input order; each gets one forward and one backward pass.
    /// Nothing is modified if validation fails.
    pub fn train<R: AsRef<[f64]>>(&mut self, samples: &[R], targets: &[L]) -> Result<FitReport> {
        let data = Dataset::from_rows(samples, targets)?;
        self.train_dataset(&data)
    }

    pub fn train_dataset(&mut self, data: &Dataset<L>) -> Result<FitReport> {
        let encoded = self.encode_targets(data)?;

        debug!(
            "train: resetting weights, {} samples x {} iterations",
            data.len(),
            self.iterations()
        );
        self.reinitialize();

        self.run_passes(data, &encoded)
    }

    /// Continues training from the current weights and momentum for `iterations` passes.
    ///
    /// Every target must belong to the configured label set. Nothing is modified if
    /// validation fails.
    pub fn partial_train<R: AsRef<[f64]>>(
        &mut self,
        samples: &[R],
        targets: &[L],
    ) -> Result<FitReport> {
        let data = Dataset::from_rows(samples, targets)?;
        self.partial_train_dataset(&data)
    }

    /// Like [`partial_train`](Self::partial_train), also checking a caller-supplied label set.
    ///
    /// `all_labels` must contain every configured label. The output layer has a fixed
    /// width, so it may not introduce labels the classifier was not built with: a strict
    /// superset of the configured labels is rejected even when every target is known.
    /// Order does not matter.
    pub fn partial_train_with_labels<R: AsRef<[f64]>>(
        &mut self,
        samples: &[R],
        targets: &[L],
        all_labels: &[L],
    ) -> Result<FitReport> {
        self.check_label_set(all_labels)?;
        self.partial_train(samples, targets)
    }

    pub fn partial_train_dataset(&mut self, data: &Dataset<L>) -> Result<FitReport> {
        let encoded = self.encode_targets(data)?;
        debug!(
            "partial_train: resuming, {} samples x {} iterations",
            data.len(),
            self.iterations()
        );
        self.run_passes(data, &encoded)
    }

    fn check_label_set(&self, all_labels: &[L]) -> Result<()> {
        if let Some(missing) = self.labels().iter().find(|l| !all_labels.contains(l)) {
            return Err(Error::InvalidArgument(format!(
                "label set is missing configured label {missing:?}"
            )));
        }
        if let Some(extra) = all_labels.iter().find(|l| !self.encoder().contains(l)) {
            return Err(Error::InvalidArgument(format!(
                "label {extra:?} was not configured; the output layer cannot grow"
            )));
        }
        Ok(())
    }

    /// Validates `data` against the network and encodes every target.
    ///
    /// Returns a flat buffer with shape `(len, output_dim)`.
    fn encode_targets(&self, data: &Dataset<L>) -> Result<Vec<f64>> {
        if data.input_dim() != self.input_dim() {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim(),
                got: data.input_dim(),
            });
        }

        let out_dim = self.encoder().output_dim();
        let mut encoded = vec![0.0; data.len() * out_dim];
        for (idx, chunk) in encoded.chunks_exact_mut(out_dim).enumerate() {
            self.encoder().encode_into(data.target(idx), chunk)?;
        }
        Ok(encoded)
    }

    fn run_passes(&mut self, data: &Dataset<L>, encoded: &[f64]) -> Result<FitReport> {
        let out_dim = self.encoder().output_dim();
        let iterations = self.iterations();
        let trainer = self.trainer();
        let network = self.network_mut();

        let mut pass_loss = 0.0;
        for iteration in 0..iterations {
            pass_loss = 0.0;
            for idx in 0..data.len() {
                let target = &encoded[idx * out_dim..(idx + 1) * out_dim];
                let output = network.forward(data.input(idx))?;
                pass_loss += half_squared_error(output, target);
                trainer.backpropagate(network, target);
            }
            pass_loss /= data.len() as f64;
            trace!("pass {iteration}: loss={pass_loss}");
        }

        if !pass_loss.is_finite() {
            warn!("training produced a non-finite loss: {pass_loss}");
        }
        debug!("finished {iterations} passes, final loss={pass_loss}");

        Ok(FitReport {
            iterations,
            final_loss: pass_loss,
        })
    }
}

#[inline]
fn half_squared_error(output: &[f64], target: &[f64]) -> f64 {
    output
        .iter()
        .zip(target)
        .map(|(o, t)| {
            let diff = t - o;
            0.5 * diff * diff
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ClassifierConfig, Inputs};

    fn weights<L>(mlp: &MlpClassifier<L>) -> Vec<(f64, f64)> {
        mlp.layers()
            .iter()
            .flat_map(|l| l.neurons())
            .flat_map(|n| n.synapses())
            .map(|s| (s.weight(), s.momentum()))
            .collect()
    }

    #[test]
    fn train_resets_weights_but_partial_train_does_not() {
        let mut cfg = ClassifierConfig::new(2, &[2]);
        cfg.iterations = 1;
        let samples = [[1.0, 0.0], [0.0, 1.0]];
        let targets = ["a", "b"];

        let mut a = MlpClassifier::with_config(cfg.clone(), ["a", "b"]).unwrap();
        a.train(&samples, &targets).unwrap();
        let after_first = weights(&a);
        a.partial_train(&samples, &targets).unwrap();

        // A reset followed by one pass, then one resumed pass, equals two passes
        // from the same reset point.
        let mut b = MlpClassifier::with_config(
            ClassifierConfig {
                iterations: 2,
                ..cfg
            },
            ["a", "b"],
        )
        .unwrap();
        b.train(&samples, &targets).unwrap();
        assert_eq!(weights(&a), weights(&b));
        assert_ne!(after_first, weights(&a));
    }

    #[test]
    fn reports_iterations_and_finite_loss() {
        let mut cfg = ClassifierConfig::new(2, &[3]);
        cfg.iterations = 7;
        let mut mlp = MlpClassifier::with_config(cfg, [0, 1]).unwrap();
        let report = mlp
            .train(&[[0.0, 0.0], [1.0, 1.0]], &[0, 1])
            .unwrap();
        assert_eq!(report.iterations, 7);
        assert!(report.final_loss.is_finite());
    }

    #[test]
    fn unknown_label_leaves_weights_untouched() {
        let mut mlp = MlpClassifier::new(2, &[2], [0, 1]).unwrap();
        let before = weights(&mlp);

        let err = mlp.partial_train(&[[0.0, 1.0], [1.0, 0.0]], &[0, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(weights(&mlp), before);

        let err = mlp.train(&[[0.0, 1.0], [1.0, 0.0]], &[0, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(weights(&mlp), before);
    }

    #[test]
    fn wrong_width_leaves_weights_untouched() {
        let mut mlp = MlpClassifier::new(2, &[2], [0, 1]).unwrap();
        let before = weights(&mlp);
        let err = mlp.train(&[[0.0, 1.0, 1.0]], &[0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, got: 3 }));
        assert_eq!(weights(&mlp), before);
    }

    #[test]
    fn explicit_label_set_must_match_configured_labels() {
        let mut mlp = MlpClassifier::new(2, &[2], [0, 1]).unwrap();
        let before = weights(&mlp);
        let samples = [[0.0, 1.0], [1.0, 0.0]];

        assert!(mlp
            .partial_train_with_labels(&samples, &[0, 2], &[0, 1, 2])
            .is_err());
        assert!(mlp
            .partial_train_with_labels(&samples, &[0, 1], &[0, 1, 2])
            .is_err());
        assert!(mlp
            .partial_train_with_labels(&samples, &[0, 1], &[0])
            .is_err());
        assert_eq!(weights(&mlp), before);

        mlp.partial_train_with_labels(&samples, &[0, 1], &[1, 0])
            .unwrap();
        assert_ne!(weights(&mlp), before);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut mlp = MlpClassifier::new(2, &[2], ["x", "y"]).unwrap();
        assert!(mlp.train(&[[0.0, 1.0]], &["x", "y"]).is_err());
        let empty: [[f64; 2]; 0] = [];
        assert!(mlp.partial_train(&empty, &[]).is_err());
    }

    #[test]
    fn strict_superset_label_set_is_rejected() {
        let mut mlp = MlpClassifier::new(2, &[2], ["a", "b"]).unwrap();
        let err = mlp
            .partial_train_with_labels(&[[1.0, 0.0]], &["a"], &["a", "b", "c"])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn trains_from_prebuilt_dataset() {
        let inputs = Inputs::from_flat(vec![1.0, 0.0, 0.0, 1.0], 2).unwrap();
        let data = Dataset::new(inputs, vec!["a", "b"]).unwrap();
        assert!(Dataset::new(data.inputs().clone(), vec!["a"]).is_err());

        let mut mlp = MlpClassifier::new(2, &[2], ["a", "b"]).unwrap();
        let report = mlp.train_dataset(&data).unwrap();
        assert_eq!(report.iterations, 1000);
        assert_eq!(mlp.predict_inputs(data.inputs()).unwrap(), data.targets().to_vec());
    }
}
