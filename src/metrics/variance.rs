// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::table::Column;

/// Denominator used for the sum of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceKind {
    /// Divide by `n`.
    #[default]
    Population,
    /// Divide by `n - 1`.
    Sample,
}

impl FromStr for VarianceKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "population" => Ok(Self::Population),
            "sample" => Ok(Self::Sample),
            other => Err(StatsError::UnknownVarianceKind(other.to_owned())),
        }
    }
}

/// Variance of raw values.
///
/// ```
/// use ndarray::array;
/// use tabstats::metrics::{VarianceKind, variance_of};
///
/// let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(variance_of(x.view(), VarianceKind::Population).unwrap(), 2.0);
/// assert_eq!(variance_of(x.view(), VarianceKind::Sample).unwrap(), 2.5);
/// ```
pub fn variance_of(values: ArrayView1<'_, f64>, kind: VarianceKind) -> Result<f64> {
    let n = values.len();
    let denominator = match kind {
        VarianceKind::Population if n >= 1 => n,
        VarianceKind::Sample if n >= 2 => n - 1,
        _ => {
            return Err(StatsError::InsufficientSamples {
                operation: "variance",
                required: if kind == VarianceKind::Sample { 2 } else { 1 },
                actual: n,
            });
        }
    };
    let mean = values.sum() / n as f64;
    let ss: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    Ok(ss / denominator as f64)
}

/// Variance of a numeric column.
pub fn variance(column: &Column, kind: VarianceKind) -> Result<f64> {
    let values = column.numeric_values()?;
    variance_of(values.view(), kind)
}
