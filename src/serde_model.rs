//! Model serialization/deserialization (feature: `serde`).
//!
//! This module defines a versioned, stable on-disk format for `MlpClassifier`.
//!
//! Design notes:
//! - We do NOT directly serialize internal `Network`/`Layer`/`Node` values, to keep the
//!   file format stable even if internal representation changes.
//! - Labels are stored in first-seen order because that order fixes which output unit
//!   each label maps to.
//! - Every synapse weight *and* momentum term is stored, so a restored classifier
//!   predicts identically and continues `partial_train` exactly where the original
//!   would have.
//! - All deserialization validates topology, parameter lengths, label set and that all
//!   parameters are finite.

use std::fmt::Debug;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    Activation, ClassifierConfig, Error, LabelEncoder, Layer, LayerKind, MlpClassifier, Network,
    Neuron, Result, Synapse,
};

pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SerializedClassifier<L> {
    pub format_version: u32,
    pub config: ClassifierConfig,
    /// First-seen order.
    pub labels: Vec<L>,
    pub activation: Activation,
    /// Hidden layers followed by the output layer. The input layer has no parameters.
    pub layers: Vec<SerializedLayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SerializedLayer {
    pub neurons: Vec<SerializedNeuron>,
}

/// Parameters of one neuron, indexed by source node of the previous layer (bias last).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SerializedNeuron {
    pub weights: Vec<f64>,
    pub momentum: Vec<f64>,
}

impl<L: Clone + PartialEq + Debug> SerializedClassifier<L> {
    pub fn validate(&self) -> Result<()> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(Error::InvalidData(format!(
                "unsupported model format_version {}; expected {}",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }
        self.config
            .validate()
            .map_err(|e| Error::InvalidData(format!("invalid config: {e}")))?;

        let encoder = LabelEncoder::new(self.labels.iter().cloned())
            .map_err(|e| Error::InvalidData(format!("invalid labels: {e}")))?;
        if encoder.len() != self.labels.len() {
            return Err(Error::InvalidData(
                "labels must not contain duplicates".to_owned(),
            ));
        }

        let expected = self.config.hidden_layers.len() + 1;
        if self.layers.len() != expected {
            return Err(Error::InvalidData(format!(
                "expected {expected} parameter layers, got {}",
                self.layers.len()
            )));
        }

        let mut prev_len = self.config.input_dim + 1;
        for (i, layer) in self.layers.iter().enumerate() {
            let is_output = i + 1 == self.layers.len();
            let size = if is_output {
                encoder.output_dim()
            } else {
                self.config.hidden_layers[i]
            };
            layer.validate(i, size, prev_len)?;
            prev_len = size + 1;
        }

        Ok(())
    }
}

impl SerializedLayer {
    fn validate(&self, idx: usize, size: usize, prev_len: usize) -> Result<()> {
        if self.neurons.len() != size {
            return Err(Error::InvalidData(format!(
                "layer {idx} has {} neurons, expected {size}",
                self.neurons.len()
            )));
        }
        for (j, neuron) in self.neurons.iter().enumerate() {
            if neuron.weights.len() != prev_len || neuron.momentum.len() != prev_len {
                return Err(Error::InvalidData(format!(
                    "layer {idx} neuron {j} has {} weights and {} momentum terms, expected {prev_len}",
                    neuron.weights.len(),
                    neuron.momentum.len()
                )));
            }
            if neuron
                .weights
                .iter()
                .chain(&neuron.momentum)
                .any(|v| !v.is_finite())
            {
                return Err(Error::InvalidData(format!(
                    "layer {idx} neuron {j} parameters must be finite"
                )));
            }
        }
        Ok(())
    }

    fn into_layer(self, kind: LayerKind) -> Result<Layer> {
        let neurons = self
            .neurons
            .into_iter()
            .map(|n| {
                let synapses = n
                    .weights
                    .into_iter()
                    .zip(n.momentum)
                    .enumerate()
                    .map(|(source, (w, m))| Synapse::from_parts(source, w, m))
                    .collect();
                Neuron::from_synapses(synapses)
            })
            .collect();
        Layer::from_neurons(kind, neurons)
    }
}

impl From<&Layer> for SerializedLayer {
    fn from(layer: &Layer) -> Self {
        let neurons = layer
            .neurons()
            .map(|n| SerializedNeuron {
                weights: n.synapses().iter().map(Synapse::weight).collect(),
                momentum: n.synapses().iter().map(Synapse::momentum).collect(),
            })
            .collect();
        Self { neurons }
    }
}

impl<L: Clone + PartialEq + Debug> From<&MlpClassifier<L>> for SerializedClassifier<L> {
    fn from(model: &MlpClassifier<L>) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            config: model.config().clone(),
            labels: model.encoder().labels().to_vec(),
            activation: model.network().activation(),
            layers: model
                .layers()
                .iter()
                .skip(1)
                .map(SerializedLayer::from)
                .collect(),
        }
    }
}

impl<L: Clone + PartialEq + Debug> TryFrom<SerializedClassifier<L>> for MlpClassifier<L> {
    type Error = Error;

    fn try_from(value: SerializedClassifier<L>) -> std::result::Result<Self, Self::Error> {
        value.validate()?;

        let last = value.layers.len() - 1;
        let mut layers = Vec::with_capacity(value.layers.len() + 1);
        layers.push(Layer::input(value.config.input_dim));
        for (i, layer) in value.layers.into_iter().enumerate() {
            let kind = if i == last {
                LayerKind::Output
            } else {
                LayerKind::Hidden
            };
            layers.push(layer.into_layer(kind)?);
        }

        let network = Network::from_layers(layers, value.activation);
        let encoder = LabelEncoder::new(value.labels)?;
        MlpClassifier::from_parts(value.config, encoder, network)
    }
}

impl<L> MlpClassifier<L>
where
    L: Clone + PartialEq + Debug + Serialize + DeserializeOwned,
{
    /// Serialize the classifier to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&SerializedClassifier::from(self))?)
    }

    /// Serialize the classifier to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&SerializedClassifier::from(self))?)
    }

    /// Parse a classifier from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ser: SerializedClassifier<L> = serde_json::from_str(s)?;
        ser.try_into()
    }

    /// Save the classifier to a JSON file (pretty-printed).
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let p = path.as_ref();
        std::fs::write(p, self.to_json_string_pretty()?)?;
        debug!("saved classifier to {}", p.display());
        Ok(())
    }

    /// Load a classifier from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let s = std::fs::read_to_string(p)?;
        let model = Self::from_json_str(&s)?;
        debug!("restored classifier from {}", p.display());
        Ok(model)
    }
}

/// Writes `classifier` to `path`.
pub fn save<L, P>(classifier: &MlpClassifier<L>, path: P) -> Result<()>
where
    L: Clone + PartialEq + Debug + Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    classifier.save_json(path)
}

/// Reads a classifier previously written by [`save`].
pub fn restore<L, P>(path: P) -> Result<MlpClassifier<L>>
where
    L: Clone + PartialEq + Debug + Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    MlpClassifier::load_json(path)
}
