//! Activation functions.
//!
//! A neuron sums `weight * source.value` over its inbound synapses and then applies
//! the activation: `value = activation(sum)`.
//!
//! The network caches the *post-activation* value in every node. During backprop the
//! derivative is computed from that cached output, so the raw weighted sum is never
//! stored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Element-wise activation function used by every neuron of a network.
pub enum Activation {
    /// Logistic sigmoid `1 / (1 + e^-x)`.
    #[default]
    Sigmoid,
}

impl Activation {
    #[inline]
    pub fn forward(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid(x),
        }
    }

    /// Derivative of the activation with respect to its input, expressed in terms
    /// of the cached post-activation output `y`.
    #[inline]
    pub fn grad_from_output(self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
        }
    }
}

#[inline]
fn sigmoid(x: f64) -> f64 {
    // Numerically stable sigmoid.
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_basic_values() {
        let y0 = Activation::Sigmoid.forward(0.0);
        assert!((y0 - 0.5).abs() < 1e-12);

        let y_pos = Activation::Sigmoid.forward(10.0);
        let y_neg = Activation::Sigmoid.forward(-10.0);
        assert!(y_pos > 0.9999);
        assert!(y_neg < 0.0001);
        assert!((y_pos + y_neg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_saturates_without_nan() {
        assert_eq!(Activation::Sigmoid.forward(1e4), 1.0);
        assert_eq!(Activation::Sigmoid.forward(-1e4), 0.0);
    }

    #[test]
    fn sigmoid_gradient_from_output() {
        let y = Activation::Sigmoid.forward(0.0);
        assert!((Activation::Sigmoid.grad_from_output(y) - 0.25).abs() < 1e-12);

        // Matches a central finite difference of the forward pass.
        let x = 0.7;
        let eps = 1e-6;
        let numeric =
            (Activation::Sigmoid.forward(x + eps) - Activation::Sigmoid.forward(x - eps)) / (2.0 * eps);
        let analytic = Activation::Sigmoid.grad_from_output(Activation::Sigmoid.forward(x));
        assert!((numeric - analytic).abs() < 1e-8);
    }
}
