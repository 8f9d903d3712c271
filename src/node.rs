use crate::Neuron;

/// Value of every bias node.
pub const BIAS_VALUE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Input,
    Bias,
    Neuron,
}

/// A single unit of a layer.
///
/// Only neurons carry an error signal and inbound synapses; input and bias nodes
/// just expose a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Input { value: f64 },
    Bias,
    Neuron(Neuron),
}

impl Node {
    #[inline]
    pub fn input() -> Self {
        Node::Input { value: 0.0 }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Node::Input { value } => *value,
            Node::Bias => BIAS_VALUE,
            Node::Neuron(n) => n.value(),
        }
    }

    #[inline]
    pub fn role(&self) -> NodeRole {
        match self {
            Node::Input { .. } => NodeRole::Input,
            Node::Bias => NodeRole::Bias,
            Node::Neuron(_) => NodeRole::Neuron,
        }
    }

    #[inline]
    pub fn as_neuron(&self) -> Option<&Neuron> {
        match self {
            Node::Neuron(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_neuron_mut(&mut self) -> Option<&mut Neuron> {
        match self {
            Node::Neuron(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_is_constant_one() {
        assert_eq!(Node::Bias.value(), 1.0);
        assert_eq!(Node::Bias.role(), NodeRole::Bias);
        assert!(Node::Bias.as_neuron().is_none());
    }

    #[test]
    fn input_exposes_its_value() {
        let node = Node::Input { value: 0.25 };
        assert_eq!(node.value(), 0.25);
        assert_eq!(node.role(), NodeRole::Input);
        assert_eq!(Node::input().value(), 0.0);
    }
}
