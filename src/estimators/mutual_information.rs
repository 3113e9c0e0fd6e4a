// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{Result, StatsError};
use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use crate::estimators::traits::GlobalValue;
use crate::table::Column;

/// Mutual information estimation entry points.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a discrete MI estimator for two aligned code arrays.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length.
    pub fn new_discrete(x: Array1<i32>, y: Array1<i32>) -> DiscreteMutualInformation {
        DiscreteMutualInformation::new(x, y)
    }

    /// Creates a discrete MI estimator for two columns of any type.
    ///
    /// Numeric columns are treated as label sets, each distinct value being its own level.
    pub fn from_columns(x: &Column, y: &Column) -> Result<DiscreteMutualInformation> {
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        if x.is_empty() {
            return Err(StatsError::EmptyInput("mutual information"));
        }
        Ok(DiscreteMutualInformation::new(
            x.symbols().codes,
            y.symbols().codes,
        ))
    }
}

/// Mutual information `I(x; y)` in nats.
pub fn mutual_information(x: &Column, y: &Column) -> Result<f64> {
    Ok(MutualInformation::from_columns(x, y)?.global_value())
}
