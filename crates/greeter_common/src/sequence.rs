//! The fixed number sequence and its accumulator.

use crate::error::{GreeterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numbers summed when nothing overrides them
pub const DEFAULT_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Ordered, immutable list of integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberSequence(Vec<i64>);

impl Default for NumberSequence {
    fn default() -> Self {
        Self(DEFAULT_NUMBERS.to_vec())
    }
}

impl From<Vec<i64>> for NumberSequence {
    fn from(numbers: Vec<i64>) -> Self {
        Self(numbers)
    }
}

impl NumberSequence {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accumulate in index order starting from 0
    pub fn sum(&self) -> Result<i64> {
        self.running_totals()
            .map(|totals| totals.last().copied().unwrap_or(0))
    }

    /// Accumulator value after each element is visited
    pub fn running_totals(&self) -> Result<Vec<i64>> {
        let mut acc: i64 = 0;
        let mut totals = Vec::with_capacity(self.0.len());

        for (i, n) in self.0.iter().enumerate() {
            acc = acc.checked_add(*n).ok_or(GreeterError::Overflow {
                visited: i,
                len: self.0.len(),
            })?;
            totals.push(acc);
        }

        Ok(totals)
    }

    /// Product of all elements (1 for an empty sequence)
    pub fn product(&self) -> Result<i64> {
        let mut acc: i64 = 1;
        for (i, n) in self.0.iter().enumerate() {
            acc = acc.checked_mul(*n).ok_or(GreeterError::Overflow {
                visited: i,
                len: self.0.len(),
            })?;
        }
        Ok(acc)
    }

    /// Square of each element, in order
    pub fn squares(&self) -> Result<Vec<i64>> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, n)| {
                n.checked_mul(*n).ok_or(GreeterError::Overflow {
                    visited: i,
                    len: self.0.len(),
                })
            })
            .collect()
    }
}

/// Renders as `[1 2 3 4 5]`
impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "]")
    }
}
