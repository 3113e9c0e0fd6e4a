// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::table::{Column, Table, is_numeric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingOperation {
    /// Min-max scaling onto `[0, 1]`.
    #[default]
    Normalize,
    /// Z-score with the population standard deviation.
    Standardize,
}

impl FromStr for ScalingOperation {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normalize" => Ok(Self::Normalize),
            "standardize" => Ok(Self::Standardize),
            other => Err(StatsError::UnknownScaling(other.to_owned())),
        }
    }
}

/// Scales every column of a numeric table, returning a fresh table of float columns.
pub fn feature_scaling(table: &Table, operation: ScalingOperation) -> Result<Table> {
    if !is_numeric(table) {
        let first = &table.columns()[0];
        let offending = table
            .columns()
            .iter()
            .find(|c| c.as_f64().is_none() || c.column_type() != first.column_type())
            .unwrap_or(first);
        return Err(StatsError::TypeMismatch {
            column: offending.name().to_owned(),
            expected: "continuous or discrete",
            found: offending.column_type(),
        });
    }

    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let values = column.numeric_values()?;
            let scaled = match operation {
                ScalingOperation::Normalize => normalize(&values, column.name())?,
                ScalingOperation::Standardize => standardize(&values, column.name())?,
            };
            Ok(Column::float(column.name(), scaled))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Table::from_parts(columns, table.n_rows()))
}

/// `(x - min) / (max - min)`.
pub fn normalize(values: &Array1<f64>, name: &str) -> Result<Array1<f64>> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("normalize"));
    }
    let min = values.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    let range = max - min;
    if range == 0.0 {
        return Err(StatsError::ZeroRange(name.to_owned()));
    }
    Ok(values.mapv(|v| (v - min) / range))
}

/// `(x - mean) / std`, population standard deviation.
pub fn standardize(values: &Array1<f64>, name: &str) -> Result<Array1<f64>> {
    let mean = values.mean().ok_or(StatsError::EmptyInput("standardize"))?;
    let std = values.std(0.0);
    if std == 0.0 {
        return Err(StatsError::ZeroVariance(name.to_owned()));
    }
    Ok(values.mapv(|v| (v - mean) / std))
}
