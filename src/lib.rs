//! A multilayer-perceptron classifier.
//!
//! `mlp-classifier` is a small, from-scratch feed-forward network built from explicit
//! nodes and synapses, trained by backpropagation with momentum, and exposed as a
//! classifier over arbitrary labels.
//!
//! # Design goals
//!
//! - Explicit structure: a [`Network`] is a list of [`Layer`]s of [`Node`]s; every
//!   [`Neuron`] owns one [`Synapse`] per node of the previous layer, bias included.
//! - Clear contracts: shapes and label sets are validated at the API boundary, before
//!   any weight is touched.
//! - Reproducible: weight initialization comes from a seeded RNG.
//!
//! # Reset vs. resume
//!
//! - [`MlpClassifier::train`] re-initializes every weight and momentum term, then trains.
//! - [`MlpClassifier::partial_train`] continues from the current weights and momentum.
//!
//! Both run exactly `iterations` passes over the samples; there is no early stopping.
//!
//! # Panics vs `Result`
//!
//! - Low-level hot path (panics on misuse): [`Backpropagation::backpropagate`].
//! - Everything reachable from [`MlpClassifier`] is shape-checked and returns [`Result`].
//!
//! # Labels
//!
//! Any `Clone + PartialEq + Debug` type can be a label. Two labels use a single output
//! neuron; more than two use one output neuron per label (one-hot). [`Label`] covers
//! label sets that mix integers and strings.

//! # Quick start
//!
//! ```rust
//! use mlp_classifier::MlpClassifier;
//!
//! # fn main() -> mlp_classifier::Result<()> {
//! let samples = vec![
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//!     vec![0.0, 0.0],
//! ];
//! let targets = vec!["a", "b", "a", "b"];
//!
//! let mut mlp = MlpClassifier::new(2, &[2], ["a", "b"])?;
//! mlp.train(&samples, &targets)?;
//!
//! let predicted = mlp.predict_batch(&samples)?;
//! assert_eq!(predicted.len(), 4);
//! # Ok(())
//! # }
//! ```

//! # Incremental training
//!
//! ```rust
//! use mlp_classifier::{ClassifierBuilder, Label};
//!
//! # fn main() -> mlp_classifier::Result<()> {
//! let mut mlp = ClassifierBuilder::new(2)?
//!     .hidden_layer(3)?
//!     .iterations(200)?
//!     .seed(1)
//!     .build([Label::from("a"), Label::from("b"), Label::from(4)])?;
//!
//! mlp.partial_train(&[[1.0, 0.0]], &[Label::from("a")])?;
//! mlp.partial_train(&[[0.0, 1.0], [0.0, 0.0]], &[Label::from("b"), Label::from(4)])?;
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod backprop;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod data;
pub mod encoder;
pub mod error;
pub mod estimator;
pub mod label;
pub mod layer;
pub mod metrics;
pub mod network;
pub mod neuron;
pub mod node;
pub mod synapse;
pub mod train;

#[cfg(feature = "serde")]
pub mod serde_model;

pub use activation::Activation;
pub use backprop::Backpropagation;
pub use builder::ClassifierBuilder;
pub use classifier::MlpClassifier;
pub use config::ClassifierConfig;
pub use data::{Dataset, Inputs};
pub use encoder::LabelEncoder;
pub use error::{Error, Result};
pub use estimator::{Estimator, IncrementalEstimator};
pub use label::Label;
pub use layer::{Layer, LayerKind};
pub use network::Network;
pub use neuron::Neuron;
pub use node::{Node, NodeRole};
pub use synapse::Synapse;
pub use train::FitReport;

#[cfg(feature = "serde")]
pub use serde_model::{restore, save};
