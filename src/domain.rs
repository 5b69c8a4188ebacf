//! Index sets with a stable label <-> id bijection.
//!
//! Every index set (I, J, K, L, M) is an ordered sequence of labels
//! `<prefix>1 .. <prefix>N`. Ids are assigned once at construction; the hot
//! paths only ever see zero-based integers.

use crate::error::{IjklmError, Result};

/// A finite ordered index set whose labels embed their 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    prefix: String,
    labels: Vec<String>,
}

impl Domain {
    /// Create the set `{prefix}1 .. {prefix}n`.
    pub fn new(prefix: &str, n: usize) -> Self {
        let labels = (1..=n).map(|x| format!("{prefix}{x}")).collect();
        Self {
            prefix: prefix.to_string(),
            labels,
        }
    }

    /// The shared label prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label for a zero-based id.
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// All labels in id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Extract the zero-based id embedded in a label: `"j17"` -> `16`.
///
/// The label must be a (possibly empty) non-digit prefix followed by the
/// decimal 1-based ordinal; anything else is a [`IjklmError::BadLabel`].
pub fn parse_ordinal(label: &str) -> Result<usize> {
    let bad = || IjklmError::BadLabel(label.to_string());

    let start = label
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(bad)?;
    let digits = &label[start..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let ordinal: usize = digits.parse().map_err(|_| bad())?;
    if ordinal == 0 {
        return Err(bad());
    }
    Ok(ordinal - 1)
}
