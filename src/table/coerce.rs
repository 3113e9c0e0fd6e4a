// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{Result, StatsError};
use crate::table::{Column, Table};

/// Raw inputs that can be normalized into a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawData {
    FloatVector(Vec<f64>),
    IntegerVector(Vec<i64>),
    /// Row-major matrix, one inner vector per row.
    FloatMatrix(Vec<Vec<f64>>),
    IntegerMatrix(Vec<Vec<i64>>),
    Table(Table),
}

impl From<Vec<f64>> for RawData {
    fn from(v: Vec<f64>) -> Self {
        Self::FloatVector(v)
    }
}

impl From<Vec<i64>> for RawData {
    fn from(v: Vec<i64>) -> Self {
        Self::IntegerVector(v)
    }
}

impl From<Vec<Vec<f64>>> for RawData {
    fn from(v: Vec<Vec<f64>>) -> Self {
        Self::FloatMatrix(v)
    }
}

impl From<Vec<Vec<i64>>> for RawData {
    fn from(v: Vec<Vec<i64>>) -> Self {
        Self::IntegerMatrix(v)
    }
}

impl From<Table> for RawData {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

/// Normalizes vectors and row-major matrices into a table.
///
/// Vectors become a single column `Var 1`; matrices get columns `Var 1..Var k`.
/// Tables pass through unchanged. Empty or ragged matrices are shape errors.
pub fn coerce_to_table(raw: impl Into<RawData>) -> Result<Table> {
    match raw.into() {
        RawData::Table(t) => Ok(t),
        RawData::FloatVector(v) => Table::new(vec![Column::float(var_name(0), v)]),
        RawData::IntegerVector(v) => Table::new(vec![Column::integer(var_name(0), v)]),
        RawData::FloatMatrix(rows) => {
            let columns = transpose(&rows)?;
            Table::new(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(j, c)| Column::float(var_name(j), Array1::from(c)))
                    .collect(),
            )
        }
        RawData::IntegerMatrix(rows) => {
            let columns = transpose(&rows)?;
            Table::new(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(j, c)| Column::integer(var_name(j), Array1::from(c)))
                    .collect(),
            )
        }
    }
}

fn var_name(index: usize) -> String {
    format!("Var {}", index + 1)
}

fn transpose<T: Copy>(rows: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let width = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| StatsError::InvalidShape("matrix has no rows".to_owned()))?;
    if width == 0 {
        return Err(StatsError::InvalidShape("matrix has no columns".to_owned()));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(StatsError::InvalidShape(format!(
            "row {} has {} values, expected {width}",
            i + 1,
            row.len()
        )));
    }
    Ok((0..width)
        .map(|j| rows.iter().map(|r| r[j]).collect())
        .collect())
}
