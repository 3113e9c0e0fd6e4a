// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::error::{Result, StatsError};
use crate::estimators::approaches::discrete::mle::DiscreteEntropy;
pub use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::table::Column;

/// Shannon entropy (natural log) of a probability vector.
///
/// Zero entries are dropped before summation. When
/// `normalize` is set, the entropy is non-zero and the input vector has more than one
/// level, the result is divided by `ln(len)`, giving a value in `[0, 1]`. Otherwise the
/// raw entropy is returned.
///
/// # Examples
///
/// ```
/// use tabstats::estimators::entropy::entropy_from_probabilities;
///
/// let uniform = [0.25, 0.25, 0.25, 0.25];
/// assert!((entropy_from_probabilities(&uniform, true) - 1.0).abs() < 1e-12);
/// assert_eq!(entropy_from_probabilities(&[1.0, 0.0], true), 0.0);
/// ```
pub fn entropy_from_probabilities<'a>(
    prob: impl Into<ArrayView1<'a, f64>>,
    normalize: bool,
) -> f64 {
    let prob = prob.into();
    let n_levels = prob.len();
    let h: f64 = prob
        .iter()
        .filter(|&&p| p != 0.0)
        .map(|&p| -p * p.ln())
        .sum();
    if normalize && h != 0.0 && n_levels > 1 {
        h / (n_levels as f64).ln()
    } else {
        h
    }
}

/// Entropy estimation entry points.
pub struct Entropy;

impl Entropy {
    /// Creates a discrete entropy estimator whose levels are the observed symbols.
    pub fn new_discrete(data: Array1<i32>) -> DiscreteEntropy {
        DiscreteEntropy::new(data)
    }

    /// Creates a discrete entropy estimator over a declared level set of size
    /// `level_count`, which may exceed the number of observed symbols.
    pub fn new_discrete_with_levels(data: Array1<i32>, level_count: usize) -> DiscreteEntropy {
        DiscreteEntropy::with_level_count(data, level_count)
    }

    /// Creates an estimator for a table column.
    ///
    /// Categorical columns use their declared levels; every other column type treats
    /// each distinct value as a level.
    pub fn from_column(column: &Column) -> DiscreteEntropy {
        let symbols = column.symbols();
        DiscreteEntropy::with_level_count(symbols.codes, symbols.level_count)
    }
}

/// Entropy of a column, see [`Entropy::from_column`] for how levels are derived.
pub fn entropy(column: &Column, normalize: bool) -> Result<f64> {
    if column.is_empty() {
        return Err(StatsError::EmptyInput("entropy"));
    }
    Ok(Entropy::from_column(column)
        .normalized(normalize)
        .global_value())
}
