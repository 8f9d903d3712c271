use crate::{Activation, Error, Layer, LayerKind, Result};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fully connected feed-forward network: input layer, hidden layers, output layer.
///
/// Topology is fixed at construction. Training mutates synapse weights, momentum and
/// neuron deltas; a forward pass mutates node values.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    activation: Activation,
    // Output-layer values of the most recent forward pass.
    output: Vec<f64>,
}

impl Network {
    pub fn new_with_seed(
        input_dim: usize,
        hidden: &[usize],
        output_dim: usize,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(input_dim, hidden, output_dim, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        input_dim: usize,
        hidden: &[usize],
        output_dim: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidArgument("input_dim must be > 0".to_owned()));
        }
        if hidden.is_empty() {
            return Err(Error::InvalidArgument(
                "network must have at least one hidden layer".to_owned(),
            ));
        }
        if hidden.contains(&0) || output_dim == 0 {
            return Err(Error::InvalidArgument(
                "all layer sizes must be > 0".to_owned(),
            ));
        }

        let mut layers = Vec::with_capacity(hidden.len() + 2);
        layers.push(Layer::input(input_dim));
        for &size in hidden {
            let prev_len = layers[layers.len() - 1].len();
            layers.push(Layer::hidden_with_rng(size, prev_len, rng));
        }
        let prev_len = layers[layers.len() - 1].len();
        layers.push(Layer::output_with_rng(output_dim, prev_len, rng));

        Ok(Self::from_layers(layers, Activation::Sigmoid))
    }

    /// Assemble a network from prebuilt layers.
    ///
    /// Callers are responsible for connectivity; `serde_model` validates it before calling.
    pub(crate) fn from_layers(layers: Vec<Layer>, activation: Activation) -> Self {
        debug_assert!(layers.len() >= 2);
        debug_assert_eq!(layers[0].kind(), LayerKind::Input);
        let output_dim = layers.last().map(Layer::size).unwrap_or(0);
        Self {
            layers,
            activation,
            output: vec![0.0; output_dim],
        }
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.layers[0].size()
    }

    #[inline]
    pub fn output_dim(&self) -> usize {
        self.output.len()
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn layer(&self, idx: usize) -> Option<&Layer> {
        self.layers.get(idx)
    }

    #[inline]
    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    #[inline]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Non-bias layer sizes, input first.
    pub fn sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::size).collect()
    }

    /// Forward pass for a single sample.
    ///
    /// Sets the input node values, activates every later layer in order, and returns the
    /// output layer values.
    pub fn forward(&mut self, sample: &[f64]) -> Result<&[f64]> {
        if sample.len() != self.input_dim() {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim(),
                got: sample.len(),
            });
        }

        self.layers[0].set_inputs(sample);
        for idx in 1..self.layers.len() {
            // Borrow the previous layer immutably and the current layer mutably.
            let (left, right) = self.layers.split_at_mut(idx);
            right[0].activate(&left[idx - 1], self.activation);
        }

        let last = &self.layers[self.layers.len() - 1];
        for (out, node) in self.output.iter_mut().zip(last.nodes()) {
            *out = node.value();
        }
        Ok(&self.output)
    }

    /// Output-layer values from the most recent forward pass.
    #[inline]
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Draws fresh weights for every synapse and clears momentum. Topology is kept.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in self.layers.iter_mut().skip(1) {
            for neuron in layer.neurons_mut() {
                neuron.reinitialize(rng);
            }
        }
        self.output.fill(0.0);
    }
}
