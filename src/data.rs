//! Contiguous sample storage.
//!
//! The training loop walks samples as slices to avoid per-step allocations. `Inputs`
//! and `Dataset` provide validated, row-major storage for feature vectors and their
//! labels. Loading samples from files or vectorizing text happens outside this crate;
//! callers hand over already-numeric rows.

use crate::{Error, Result};

/// A collection of unlabelled samples.
///
/// Stored as a contiguous buffer with row-major layout:
/// - `inputs.len() == len * input_dim`
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    inputs: Vec<f64>,
    len: usize,
    input_dim: usize,
}

impl Inputs {
    /// Build inputs from a flat buffer with shape `(len, input_dim)`.
    pub fn from_flat(inputs: Vec<f64>, input_dim: usize) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidArgument("input_dim must be > 0".to_owned()));
        }
        if inputs.is_empty() {
            return Err(Error::InvalidArgument("inputs must not be empty".to_owned()));
        }
        if inputs.len() % input_dim != 0 {
            return Err(Error::InvalidArgument(format!(
                "inputs length {} is not divisible by input_dim {}",
                inputs.len(),
                input_dim
            )));
        }
        ensure_finite(&inputs)?;

        let len = inputs.len() / input_dim;
        Ok(Self {
            inputs,
            len,
            input_dim,
        })
    }

    /// Build inputs from per-sample rows.
    ///
    /// This is a convenience constructor (it copies into contiguous storage).
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidArgument("inputs must not be empty".to_owned()));
        }

        let input_dim = rows[0].as_ref().len();
        if input_dim == 0 {
            return Err(Error::InvalidArgument("input_dim must be > 0".to_owned()));
        }

        let mut flat = Vec::with_capacity(rows.len() * input_dim);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != input_dim {
                return Err(Error::InvalidArgument(format!(
                    "input row {i} has len {}, expected {input_dim}",
                    row.len()
                )));
            }
            flat.extend_from_slice(row);
        }
        ensure_finite(&flat)?;

        Ok(Self {
            inputs: flat,
            len: rows.len(),
            input_dim,
        })
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    /// Returns the per-sample feature count.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    /// Returns the `idx`-th sample (shape: `(input_dim,)`).
    ///
    /// Panics if `idx >= len`.
    pub fn input(&self, idx: usize) -> &[f64] {
        let start = idx * self.input_dim;
        &self.inputs[start..start + self.input_dim]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.inputs.chunks_exact(self.input_dim)
    }
}

/// Samples paired index-for-index with their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    inputs: Inputs,
    targets: Vec<L>,
}

impl<L: Clone> Dataset<L> {
    /// Build a dataset from per-sample rows and their labels.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], targets: &[L]) -> Result<Self> {
        if rows.len() != targets.len() {
            return Err(Error::InvalidArgument(format!(
                "samples/targets length mismatch: {} vs {}",
                rows.len(),
                targets.len()
            )));
        }
        let inputs = Inputs::from_rows(rows)?;
        Ok(Self {
            inputs,
            targets: targets.to_vec(),
        })
    }

    /// Pair already-validated inputs with labels.
    pub fn new(inputs: Inputs, targets: Vec<L>) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidArgument(format!(
                "samples/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }
        Ok(Self { inputs, targets })
    }
}

impl<L> Dataset<L> {
    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    #[inline]
    /// Returns the per-sample feature count.
    pub fn input_dim(&self) -> usize {
        self.inputs.input_dim()
    }

    #[inline]
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    #[inline]
    pub fn targets(&self) -> &[L] {
        &self.targets
    }

    #[inline]
    /// Returns the `idx`-th sample.
    ///
    /// Panics if `idx >= len`.
    pub fn input(&self, idx: usize) -> &[f64] {
        self.inputs.input(idx)
    }

    #[inline]
    /// Returns the `idx`-th label.
    ///
    /// Panics if `idx >= len`.
    pub fn target(&self, idx: usize) -> &L {
        &self.targets[idx]
    }
}

pub(crate) fn ensure_finite(values: &[f64]) -> Result<()> {
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "features must be finite, found {} at flat index {pos}",
            values[pos]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_from_flat_validates_shapes() {
        assert!(Inputs::from_flat(vec![0.0, 1.0, 2.0, 3.0], 2).is_ok());
        assert!(Inputs::from_flat(vec![0.0, 1.0, 2.0], 2).is_err());
        assert!(Inputs::from_flat(vec![], 2).is_err());
        assert!(Inputs::from_flat(vec![1.0], 0).is_err());
    }

    #[test]
    fn dataset_from_rows_validates() {
        let rows = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let ds = Dataset::from_rows(&rows, &["a", "b"]).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.input_dim(), 2);
        assert_eq!(ds.input(1), &[0.0, 1.0]);
        assert_eq!(*ds.target(1), "b");

        assert!(Dataset::from_rows(&rows, &["a"]).is_err());

        let ragged = vec![vec![1.0, 0.0], vec![0.0]];
        assert!(Dataset::from_rows(&ragged, &["a", "b"]).is_err());

        let empty: Vec<Vec<f64>> = vec![];
        assert!(Dataset::<&str>::from_rows(&empty, &[]).is_err());
    }

    #[test]
    fn rejects_non_finite_features() {
        let rows = vec![vec![1.0, f64::NAN]];
        let err = Inputs::from_rows(&rows).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn iter_yields_rows_in_order() {
        let inputs = Inputs::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let rows: Vec<&[f64]> = inputs.iter().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }
}
