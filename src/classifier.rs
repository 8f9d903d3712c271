//! The public classifier.
//!
//! [`MlpClassifier`] owns a [`Network`], the [`LabelEncoder`] for its label set, and the
//! seeded RNG used for weight initialization. Topology is fixed at construction:
//!
//! - input layer: `input_dim` inputs + bias
//! - one hidden layer per entry of `hidden_layers` (+ bias each)
//! - output layer: 1 neuron for two labels, otherwise one neuron per label
//!
//! Training entry points live in `train.rs`:
//!
//! - `train` **resets** every weight and momentum term, then trains from scratch.
//! - `partial_train` **resumes** from the current weights and momentum.

use std::fmt::Debug;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    data, metrics, Backpropagation, ClassifierConfig, Inputs, Layer, LabelEncoder, Network,
    Result,
};

#[derive(Debug, Clone)]
pub struct MlpClassifier<L> {
    config: ClassifierConfig,
    encoder: LabelEncoder<L>,
    network: Network,
    trainer: Backpropagation,
    rng: StdRng,
}

impl<L: Clone + PartialEq + Debug> MlpClassifier<L> {
    /// Classifier with default hyperparameters (1000 iterations per training call).
    ///
    /// Fails if `hidden_layers` is empty or `labels` has fewer than two distinct entries.
    pub fn new<I>(input_dim: usize, hidden_layers: &[usize], labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        Self::with_config(ClassifierConfig::new(input_dim, hidden_layers), labels)
    }

    pub fn with_config<I>(config: ClassifierConfig, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        config.validate()?;
        let encoder = LabelEncoder::new(labels)?;
        let trainer = Backpropagation::new(config.learning_rate, config.momentum)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let network = Network::new_with_rng(
            config.input_dim,
            &config.hidden_layers,
            encoder.output_dim(),
            &mut rng,
        )?;

        debug!(
            "built classifier: sizes={:?} labels={} seed={}",
            network.sizes(),
            encoder.len(),
            config.seed
        );

        Ok(Self {
            config,
            encoder,
            network,
            trainer,
            rng,
        })
    }

    /// Reassemble a classifier from validated parts.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        config: ClassifierConfig,
        encoder: LabelEncoder<L>,
        network: Network,
    ) -> Result<Self> {
        let trainer = Backpropagation::new(config.learning_rate, config.momentum)?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            encoder,
            network,
            trainer,
            rng,
        })
    }

    /// Labels in first-seen order.
    #[inline]
    pub fn labels(&self) -> &[L] {
        self.encoder.labels()
    }

    /// Predicts the label of one sample.
    ///
    /// Fails on a wrong feature count or on any non-finite feature.
    pub fn predict(&mut self, sample: &[f64]) -> Result<L> {
        data::ensure_finite(sample)?;
        let output = self.network.forward(sample)?;
        Ok(self.encoder.decode(output).clone())
    }

    /// Predicts one label per row of an already-validated batch.
    pub fn predict_inputs(&mut self, inputs: &Inputs) -> Result<Vec<L>> {
        inputs.iter().map(|sample| self.predict(sample)).collect()
    }

    /// Predicts one label per sample, in order.
    pub fn predict_batch<R: AsRef<[f64]>>(&mut self, samples: &[R]) -> Result<Vec<L>> {
        samples
            .iter()
            .map(|sample| self.predict(sample.as_ref()))
            .collect()
    }

    /// Raw output activations for one sample. Same input checks as [`predict`](Self::predict).
    pub fn predict_proba(&mut self, sample: &[f64]) -> Result<Vec<f64>> {
        data::ensure_finite(sample)?;
        Ok(self.network.forward(sample)?.to_vec())
    }

    /// Fraction of `samples` whose prediction equals the matching entry of `targets`.
    pub fn score<R: AsRef<[f64]>>(&mut self, samples: &[R], targets: &[L]) -> Result<f64> {
        let predicted = self.predict_batch(samples)?;
        metrics::accuracy(&predicted, targets)
    }
}

impl<L> MlpClassifier<L> {
    #[inline]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[inline]
    pub fn encoder(&self) -> &LabelEncoder<L> {
        &self.encoder
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        self.network.layers()
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.config.input_dim
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    #[inline]
    pub(crate) fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    #[inline]
    pub(crate) fn trainer(&self) -> Backpropagation {
        self.trainer
    }

    /// Fresh weights from the classifier's RNG; momentum cleared.
    pub(crate) fn reinitialize(&mut self) {
        self.network.reinitialize(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Error, NodeRole};

    #[test]
    fn binary_topology() {
        let mlp = MlpClassifier::new(2, &[2], [0, 1]).unwrap();
        let layers = mlp.layers();
        assert_eq!(layers.len(), 3);

        assert_eq!(layers[0].len(), 3);
        assert!(layers[0].nodes().iter().any(|n| n.role() != NodeRole::Neuron));

        assert_eq!(layers[1].len(), 3);
        assert!(layers[1].nodes().iter().any(|n| n.role() != NodeRole::Neuron));

        assert_eq!(layers[2].len(), 1);
        assert!(layers[2].nodes().iter().all(|n| n.role() == NodeRole::Neuron));
    }

    #[test]
    fn multiclass_topology() {
        let mlp = MlpClassifier::new(5, &[3, 2], ["a", "b", "c", "d"]).unwrap();
        let lens: Vec<usize> = mlp.layers().iter().map(Layer::len).collect();
        assert_eq!(lens, vec![6, 4, 3, 4]);
    }

    #[test]
    fn synapses_connect_every_previous_node() {
        let mlp = MlpClassifier::new(2, &[2], [0, 1]).unwrap();
        let layers = mlp.layers();
        for neuron in layers[1].neurons() {
            assert_eq!(neuron.synapses().len(), 3);
            let mut sources: Vec<usize> = neuron.synapses().iter().map(|s| s.source()).collect();
            sources.sort_unstable();
            assert_eq!(sources, vec![0, 1, 2]);
        }
    }

    #[test]
    fn rejects_empty_hidden_layers() {
        let err = MlpClassifier::new(2, &[], [0, 1]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn rejects_single_label() {
        let err = MlpClassifier::new(2, &[2], [0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = MlpClassifier::new(2, &[2], [1, 1]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let mut mlp = MlpClassifier::new(2, &[2], ["a", "b"]).unwrap();
        let err = mlp.predict(&[1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, got: 3 }));
    }

    #[test]
    fn predict_batch_keeps_order() {
        let mut mlp = MlpClassifier::new(2, &[3], ["a", "b", "c"]).unwrap();
        let samples = [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
        let batch = mlp.predict_batch(&samples).unwrap();
        let single: Vec<&str> = samples.iter().map(|s| mlp.predict(s).unwrap()).collect();
        assert_eq!(batch, single);
    }

    #[test]
    fn predict_proba_has_output_width() {
        let mut mlp = MlpClassifier::new(2, &[2], [0, 1, 2]).unwrap();
        let p = mlp.predict_proba(&[0.5, 0.5]).unwrap();
        assert_eq!(p.len(), 3);
        assert!(p.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn rejects_non_finite_features() {
        let mut binary = MlpClassifier::new(2, &[2], ["a", "b"]).unwrap();
        for sample in [[f64::NAN, 0.0], [f64::INFINITY, f64::NEG_INFINITY]] {
            let err = binary.predict(&sample).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert!(binary.predict_proba(&sample).is_err());
        }
        assert!(binary.predict_batch(&[[0.0, 1.0], [0.0, f64::NAN]]).is_err());

        let mut multi = MlpClassifier::new(2, &[2], ["a", "b", "c"]).unwrap();
        let err = multi.predict(&[f64::NAN, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn predict_inputs_matches_predict_batch() {
        let mut mlp = MlpClassifier::new(2, &[3], ["a", "b", "c"]).unwrap();
        let flat = vec![0.0, 1.0, 1.0, 0.0, 0.3, 0.7];
        let inputs = Inputs::from_flat(flat, 2).unwrap();

        let rows: Vec<&[f64]> = inputs.iter().collect();
        let expected = mlp.predict_batch(&rows).unwrap();
        assert_eq!(mlp.predict_inputs(&inputs).unwrap(), expected);
    }
}
