//! Metrics.
//!
//! Metrics are evaluation helpers (they do not participate in backprop).

use crate::{Error, Result};

/// Fraction of positions where `predicted` and `actual` agree.
pub fn accuracy<L: PartialEq>(predicted: &[L], actual: &[L]) -> Result<f64> {
    if predicted.len() != actual.len() {
        return Err(Error::InvalidArgument(format!(
            "predicted/actual length mismatch: {} vs {}",
            predicted.len(),
            actual.len()
        )));
    }
    if predicted.is_empty() {
        return Err(Error::InvalidArgument(
            "accuracy requires at least one sample".to_owned(),
        ));
    }

    let correct = predicted.iter().zip(actual).filter(|(p, a)| p == a).count();
    Ok(correct as f64 / predicted.len() as f64)
}
