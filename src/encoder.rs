//! Label encoding.
//!
//! Labels are kept in first-seen order, and that order fixes the output unit each
//! label maps to:
//!
//! - two labels: a single output unit, `0.0` for the first label and `1.0` for the second;
//!   decoding thresholds at `0.5`.
//! - more than two labels: one output unit per label (one-hot); decoding picks the
//!   largest output, lowest index on ties.

use std::fmt::Debug;

use crate::{Error, Result};

/// Output value above which a binary prediction decodes to the second label.
pub const BINARY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder<L> {
    labels: Vec<L>,
}

impl<L: Clone + PartialEq + Debug> LabelEncoder<L> {
    /// Builds an encoder from `labels`, dropping duplicates but keeping first-seen order.
    ///
    /// Returns an error if fewer than two distinct labels remain.
    pub fn new<I>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        let mut distinct: Vec<L> = Vec::new();
        for label in labels {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }
        if distinct.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "at least 2 distinct labels are required, got {}",
                distinct.len()
            )));
        }
        Ok(Self { labels: distinct })
    }

    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; an encoder holds at least two labels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.labels.len() == 2
    }

    /// Width of the encoded target vector.
    #[inline]
    pub fn output_dim(&self) -> usize {
        if self.is_binary() {
            1
        } else {
            self.labels.len()
        }
    }

    #[inline]
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    #[inline]
    pub fn contains(&self, label: &L) -> bool {
        self.index_of(label).is_some()
    }

    pub fn encode(&self, label: &L) -> Result<Vec<f64>> {
        let mut out = vec![0.0; self.output_dim()];
        self.encode_into(label, &mut out)?;
        Ok(out)
    }

    /// Writes the target vector for `label` into `out`.
    ///
    /// Shape contract: `out.len() == self.output_dim()`.
    pub fn encode_into(&self, label: &L, out: &mut [f64]) -> Result<()> {
        debug_assert_eq!(out.len(), self.output_dim());

        let idx = self
            .index_of(label)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown label {label:?}")))?;

        if self.is_binary() {
            out[0] = idx as f64;
        } else {
            out.fill(0.0);
            out[idx] = 1.0;
        }
        Ok(())
    }

    /// Maps network output back to a label.
    ///
    /// Shape contract: `output.len() == self.output_dim()`.
    pub fn decode(&self, output: &[f64]) -> &L {
        debug_assert_eq!(output.len(), self.output_dim());

        if self.is_binary() {
            return if output[0] > BINARY_THRESHOLD {
                &self.labels[1]
            } else {
                &self.labels[0]
            };
        }

        let mut best = 0;
        for (i, &v) in output.iter().enumerate().skip(1) {
            if v > output[best] {
                best = i;
            }
        }
        &self.labels[best]
    }
}
