#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backprop::{validate_learning_rate, validate_momentum, DEFAULT_LEARNING_RATE, DEFAULT_MOMENTUM};
use crate::{Error, Result};

/// Number of full passes over the training samples per `train` / `partial_train` call.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Classifier topology and training hyperparameters.
///
/// Training always runs exactly `iterations` passes; there is no early stopping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub input_dim: usize,
    pub hidden_layers: Vec<usize>,
    pub iterations: usize,
    pub learning_rate: f64,
    pub momentum: f64,
    /// Seed for weight initialization and every later re-initialization by `train`.
    pub seed: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            input_dim: 0,
            hidden_layers: Vec::new(),
            iterations: DEFAULT_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
            seed: 0,
        }
    }
}

impl ClassifierConfig {
    pub fn new(input_dim: usize, hidden_layers: &[usize]) -> Self {
        Self {
            input_dim,
            hidden_layers: hidden_layers.to_vec(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(Error::InvalidArgument("input_dim must be > 0".to_owned()));
        }
        if self.hidden_layers.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one hidden layer is required".to_owned(),
            ));
        }
        if let Some(pos) = self.hidden_layers.iter().position(|&n| n == 0) {
            return Err(Error::InvalidArgument(format!(
                "hidden layer {pos} size must be > 0"
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidArgument("iterations must be > 0".to_owned()));
        }
        validate_learning_rate(self.learning_rate)?;
        validate_momentum(self.momentum)?;
        Ok(())
    }

    /// Parse a config from JSON; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ClassifierConfig::new(2, &[2]);
        assert_eq!(cfg.iterations, 1000);
        assert_eq!(cfg.learning_rate, 1.0);
        assert_eq!(cfg.momentum, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(ClassifierConfig::new(2, &[]).validate().is_err());
        assert!(ClassifierConfig::new(0, &[2]).validate().is_err());
        assert!(ClassifierConfig::new(2, &[2, 0]).validate().is_err());

        let mut cfg = ClassifierConfig::new(2, &[2]);
        cfg.iterations = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ClassifierConfig::new(2, &[2]);
        cfg.momentum = 1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = ClassifierConfig::new(2, &[2]);
        cfg.learning_rate = -0.1;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_fills_in_defaults() {
        let cfg = ClassifierConfig::from_json_str(r#"{"input_dim":4,"hidden_layers":[3]}"#).unwrap();
        assert_eq!(cfg, ClassifierConfig::new(4, &[3]));

        assert!(ClassifierConfig::from_json_str(r#"{"input_dim":4,"hidden_layers":[]}"#).is_err());
    }
}
