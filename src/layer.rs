use rand::Rng;

use crate::{Activation, Error, Neuron, Node, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Input nodes followed by one bias.
    Input,
    /// Neurons followed by one bias.
    Hidden,
    /// Neurons only.
    Output,
}

/// An ordered group of nodes forming one stage of a network.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    nodes: Vec<Node>,
}

impl Layer {
    /// `size` input nodes and a bias.
    pub fn input(size: usize) -> Self {
        let mut nodes = Vec::with_capacity(size + 1);
        nodes.extend((0..size).map(|_| Node::input()));
        nodes.push(Node::Bias);
        Self {
            kind: LayerKind::Input,
            nodes,
        }
    }

    /// `size` neurons fully connected to a previous layer of `prev_len` nodes, and a bias.
    pub fn hidden_with_rng<R: Rng + ?Sized>(size: usize, prev_len: usize, rng: &mut R) -> Self {
        let mut nodes = Vec::with_capacity(size + 1);
        nodes.extend((0..size).map(|_| Node::Neuron(Neuron::new_with_rng(prev_len, rng))));
        nodes.push(Node::Bias);
        Self {
            kind: LayerKind::Hidden,
            nodes,
        }
    }

    /// `size` neurons fully connected to a previous layer of `prev_len` nodes.
    pub fn output_with_rng<R: Rng + ?Sized>(size: usize, prev_len: usize, rng: &mut R) -> Self {
        let nodes = (0..size)
            .map(|_| Node::Neuron(Neuron::new_with_rng(prev_len, rng)))
            .collect();
        Self {
            kind: LayerKind::Output,
            nodes,
        }
    }

    /// Rebuild a hidden or output layer from already-weighted neurons.
    pub fn from_neurons(kind: LayerKind, neurons: Vec<Neuron>) -> Result<Self> {
        if neurons.is_empty() {
            return Err(Error::InvalidData(
                "layer must contain at least one neuron".to_owned(),
            ));
        }
        let mut nodes: Vec<Node> = neurons.into_iter().map(Node::Neuron).collect();
        match kind {
            LayerKind::Input => {
                return Err(Error::InvalidData(
                    "input layer cannot be built from neurons".to_owned(),
                ))
            }
            LayerKind::Hidden => nodes.push(Node::Bias),
            LayerKind::Output => {}
        }
        Ok(Self { kind, nodes })
    }

    #[inline]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Number of nodes, bias included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of non-bias nodes.
    #[inline]
    pub fn size(&self) -> usize {
        match self.kind {
            LayerKind::Input | LayerKind::Hidden => self.nodes.len() - 1,
            LayerKind::Output => self.nodes.len(),
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.nodes.iter().filter_map(Node::as_neuron)
    }

    pub(crate) fn neurons_mut(&mut self) -> impl Iterator<Item = &mut Neuron> {
        self.nodes.iter_mut().filter_map(Node::as_neuron_mut)
    }

    /// Current value of every node, bias included.
    pub fn values(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::value).collect()
    }

    /// Copies `sample` into the input nodes.
    ///
    /// Shape contract: `sample.len() == self.size()` and this is an input layer.
    pub(crate) fn set_inputs(&mut self, sample: &[f64]) {
        debug_assert_eq!(self.kind, LayerKind::Input);
        debug_assert_eq!(sample.len(), self.size());

        for (node, &x) in self.nodes.iter_mut().zip(sample) {
            if let Node::Input { value } = node {
                *value = x;
            }
        }
    }

    /// Forward pass for every neuron of this layer.
    ///
    /// `prev` is the previous layer; bias values are left untouched.
    #[inline]
    pub(crate) fn activate(&mut self, prev: &Layer, activation: Activation) {
        for neuron in self.neurons_mut() {
            neuron.activate(&prev.nodes, activation);
        }
    }
}
