//! Classifier builder.
//!
//! `ClassifierBuilder` spells out topology and hyperparameters one step at a time and
//! validates each value as it is set:
//!
//! ```rust
//! use mlp_classifier::{ClassifierBuilder, Label};
//!
//! # fn main() -> mlp_classifier::Result<()> {
//! let mlp = ClassifierBuilder::new(5)?
//!     .hidden_layer(3)?
//!     .hidden_layer(2)?
//!     .iterations(500)?
//!     .learning_rate(0.5)?
//!     .momentum(0.9)?
//!     .seed(7)
//!     .build([Label::from("a"), Label::from("b"), Label::from(4)])?;
//! assert_eq!(mlp.layers().len(), 4);
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use crate::backprop::{validate_learning_rate, validate_momentum};
use crate::{ClassifierConfig, Error, MlpClassifier, Result};

#[derive(Debug, Clone)]
pub struct ClassifierBuilder {
    config: ClassifierConfig,
}

impl ClassifierBuilder {
    /// Start building a classifier for samples with `input_dim` features.
    pub fn new(input_dim: usize) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidArgument("input_dim must be > 0".to_owned()));
        }
        Ok(Self {
            config: ClassifierConfig::new(input_dim, &[]),
        })
    }

    /// Append a hidden layer of `size` neurons.
    pub fn hidden_layer(mut self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "hidden layer size must be > 0".to_owned(),
            ));
        }
        self.config.hidden_layers.push(size);
        Ok(self)
    }

    pub fn hidden_layers(mut self, sizes: &[usize]) -> Result<Self> {
        for &size in sizes {
            self = self.hidden_layer(size)?;
        }
        Ok(self)
    }

    pub fn iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::InvalidArgument("iterations must be > 0".to_owned()));
        }
        self.config.iterations = iterations;
        Ok(self)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        self.config.learning_rate = learning_rate;
        Ok(self)
    }

    pub fn momentum(mut self, momentum: f64) -> Result<Self> {
        validate_momentum(momentum)?;
        self.config.momentum = momentum;
        Ok(self)
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[inline]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Build the classifier for the given label set.
    pub fn build<L, I>(self, labels: I) -> Result<MlpClassifier<L>>
    where
        L: Clone + PartialEq + Debug,
        I: IntoIterator<Item = L>,
    {
        MlpClassifier::with_config(self.config, labels)
    }
}
