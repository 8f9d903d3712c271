//! Backpropagation with momentum.
//!
//! One call to [`Backpropagation::backpropagate`] performs exactly one backward pass for
//! the sample most recently passed to [`Network::forward`]:
//!
//! 1. output deltas: `δk = (tk - ok) * f'(ok)`
//! 2. hidden deltas, last hidden layer first: `δj = (Σk δk * w(j→k)) * f'(oj)`
//! 3. every synapse `i → j`: `Δw = lr * δj * value_i + momentum * previous Δw`
//!
//! All deltas are computed before any weight changes, so hidden deltas see the weights
//! that produced the forward pass.
//!
//! Momentum lives in the synapses themselves, so it survives across training calls.

use crate::{Error, Network, Result};

/// Default step size.
pub const DEFAULT_LEARNING_RATE: f64 = 1.0;

/// Default fraction of the previous weight change added to the current one.
pub const DEFAULT_MOMENTUM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backpropagation {
    learning_rate: f64,
    momentum: f64,
}

impl Default for Backpropagation {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
        }
    }
}

impl Backpropagation {
    /// Returns an error if `learning_rate` is not finite and `> 0`, or if `momentum` is
    /// not finite and in `[0, 1)`.
    pub fn new(learning_rate: f64, momentum: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        validate_momentum(momentum)?;
        Ok(Self {
            learning_rate,
            momentum,
        })
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    #[inline]
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Backward pass and weight update for one sample.
    ///
    /// Call `network.forward(sample)` first; `target` is the encoded label of that sample.
    ///
    /// Panics if `target.len() != network.output_dim()`.
    pub fn backpropagate(&self, network: &mut Network, target: &[f64]) {
        assert_eq!(
            target.len(),
            network.output_dim(),
            "target len {} does not match network output_dim {}",
            target.len(),
            network.output_dim()
        );

        let activation = network.activation();
        let layers = network.layers_mut();
        let last = layers.len() - 1;

        for (neuron, &t) in layers[last].neurons_mut().zip(target) {
            let o = neuron.value();
            neuron.set_delta((t - o) * activation.grad_from_output(o));
        }

        for idx in (1..last).rev() {
            let (left, right) = layers.split_at_mut(idx + 1);
            let next = &right[0];
            for (j, neuron) in left[idx].neurons_mut().enumerate() {
                let error: f64 = next.neurons().map(|k| k.delta() * k.weight_from(j)).sum();
                let o = neuron.value();
                neuron.set_delta(error * activation.grad_from_output(o));
            }
        }

        for idx in 1..layers.len() {
            let (left, right) = layers.split_at_mut(idx);
            let prev = left[idx - 1].nodes();
            for neuron in right[0].neurons_mut() {
                let step = self.learning_rate * neuron.delta();
                for s in neuron.synapses_mut() {
                    let dw = step.mul_add(prev[s.source()].value(), self.momentum * s.momentum());
                    s.adjust(dw);
                }
            }
        }
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(Error::InvalidArgument(format!(
            "learning rate must be finite and > 0, got {learning_rate}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_momentum(momentum: f64) -> Result<()> {
    if !(momentum.is_finite() && (0.0..1.0).contains(&momentum)) {
        return Err(Error::InvalidArgument(format!(
            "momentum must be finite and in [0,1), got {momentum}"
        )));
    }
    Ok(())
}
