// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pairwise dependence between table columns.
//!
//! [`correlation`] picks the measure once for the whole table: Pearson's coefficient when
//! every column is numeric (all continuous or all discrete), mutual information otherwise.

use ndarray::{Array1, Array2};

use crate::error::{Result, StatsError};
use crate::estimators::mutual_information::MutualInformation;
use crate::estimators::traits::GlobalValue;
use crate::table::{Column, Table, is_numeric};

/// Signed Pearson correlation coefficient in `[-1, 1]`.
///
/// Both columns must be numeric and of equal length. A constant column makes the
/// coefficient undefined and is reported as [`StatsError::ZeroVariance`].
pub fn pearson(x: &Column, y: &Column) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    let xs = x.numeric_values()?;
    let ys = y.numeric_values()?;
    let dx = centered(&xs).ok_or(StatsError::EmptyInput("pearson"))?;
    let dy = centered(&ys).ok_or(StatsError::EmptyInput("pearson"))?;

    let sxx = dx.dot(&dx);
    let syy = dy.dot(&dy);
    if sxx == 0.0 {
        return Err(StatsError::ZeroVariance(x.name().to_owned()));
    }
    if syy == 0.0 {
        return Err(StatsError::ZeroVariance(y.name().to_owned()));
    }
    Ok(dx.dot(&dy) / (sxx * syy).sqrt())
}

fn centered(values: &Array1<f64>) -> Option<Array1<f64>> {
    let mean = values.mean()?;
    Some(values - mean)
}

/// The statistic stored in a [`PairwiseMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependenceMeasure {
    Pearson,
    MutualInformation,
}

/// Symmetric matrix of a pairwise statistic, labeled by column name on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    names: Vec<String>,
    values: Array2<f64>,
    measure: DependenceMeasure,
}

impl PairwiseMatrix {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn measure(&self) -> DependenceMeasure {
        self.measure
    }

    /// Entry for the pair `(row, col)` looked up by column name.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == row)?;
        let j = self.names.iter().position(|n| n == col)?;
        Some(self.values[[i, j]])
    }
}

/// Builds the pairwise dependence matrix of a table.
///
/// Only the upper triangle is computed; each value is mirrored so the matrix is symmetric
/// by construction. The diagonal holds 1 for Pearson and each column's entropy for mutual
/// information.
pub fn correlation(table: &Table) -> Result<PairwiseMatrix> {
    let measure = if is_numeric(table) {
        DependenceMeasure::Pearson
    } else {
        DependenceMeasure::MutualInformation
    };
    tracing::debug!(?measure, columns = table.n_cols(), "computing pairwise matrix");

    let columns = table.columns();
    let n = columns.len();
    let mut values = Array2::zeros((n, n));
    for i in 0..n {
        for j in i..n {
            let v = match measure {
                DependenceMeasure::Pearson => pearson(&columns[i], &columns[j])?,
                DependenceMeasure::MutualInformation => {
                    MutualInformation::from_columns(&columns[i], &columns[j])?.global_value()
                }
            };
            values[[i, j]] = v;
            values[[j, i]] = v;
        }
    }

    Ok(PairwiseMatrix {
        names: table.names(),
        values,
        measure,
    })
}
