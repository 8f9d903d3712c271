use rand::Rng;

use crate::{Activation, Node, Synapse};

/// A node that sums weighted inputs from the previous layer and applies an activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    value: f64,
    delta: f64,
    synapses: Vec<Synapse>,
}

impl Neuron {
    /// Creates a neuron with one randomly weighted synapse per node of the previous layer.
    pub fn new_with_rng<R: Rng + ?Sized>(num_inputs: usize, rng: &mut R) -> Self {
        let synapses = (0..num_inputs)
            .map(|source| Synapse::new_with_rng(source, rng))
            .collect();
        Self::from_synapses(synapses)
    }

    pub fn from_synapses(synapses: Vec<Synapse>) -> Self {
        Self {
            value: 0.0,
            delta: 0.0,
            synapses,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Error signal from the most recent backward pass.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    #[inline]
    pub(crate) fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    #[inline]
    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    #[inline]
    pub(crate) fn synapses_mut(&mut self) -> &mut [Synapse] {
        &mut self.synapses
    }

    /// Weight of the synapse fed by node `source` of the previous layer.
    #[inline]
    pub fn weight_from(&self, source: usize) -> f64 {
        self.synapses[source].weight()
    }

    /// Forward pass for this neuron.
    ///
    /// `inputs` are the nodes of the previous layer, bias included.
    #[inline]
    pub fn activate(&mut self, inputs: &[Node], activation: Activation) -> f64 {
        debug_assert_eq!(inputs.len(), self.synapses.len());

        let mut sum = 0.0;
        for s in &self.synapses {
            sum = s.weight().mul_add(inputs[s.source()].value(), sum);
        }
        self.value = activation.forward(sum);
        self.value
    }

    pub(crate) fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for s in &mut self.synapses {
            s.reinitialize(rng);
        }
        self.value = 0.0;
        self.delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_sums_weighted_inputs() {
        let mut n = Neuron::from_synapses(vec![
            Synapse::from_parts(0, 2.0, 0.0),
            Synapse::from_parts(1, -1.0, 0.0),
            Synapse::from_parts(2, 0.5, 0.0),
        ]);
        // 2*1 - 1*3 + 0.5*2 = 0
        let inputs = [
            Node::Input { value: 1.0 },
            Node::Input { value: 3.0 },
            Node::Input { value: 2.0 },
        ];
        let y = n.activate(&inputs, Activation::Sigmoid);
        assert!((y - 0.5).abs() < 1e-12);
        assert_eq!(n.value(), y);
    }

    #[test]
    fn weight_from_looks_up_by_source() {
        let n = Neuron::from_synapses(vec![
            Synapse::from_parts(0, 0.1, 0.0),
            Synapse::from_parts(1, 0.2, 0.0),
        ]);
        assert_eq!(n.weight_from(1), 0.2);
    }
}
