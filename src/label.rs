use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A class label that may be either an integer or a string.
///
/// Use it when one label set mixes both kinds, e.g. `["a", "b", 4]`. Any
/// `Clone + PartialEq` type works as a label; this is just a convenient default.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{v}"),
            Label::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(value.into())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Str(value)
    }
}
