// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tabular container consumed by every statistic of the crate.
//!
//! A [`Table`] is an ordered set of uniquely named, equally long [`Column`]s. Column
//! types are decided when a column is built and never re-derived from values, see
//! [`ColumnType`]. Tables are immutable snapshots: operations that transform data
//! (discretization, scaling, filtering) return new tables.

pub mod classify;
pub mod coerce;
pub mod column;

pub use classify::{TableKind, classify, is_continuous, is_numeric};
pub use coerce::{RawData, coerce_to_table};
pub use column::{Categorical, Column, ColumnData, ColumnType, Symbols};

use std::collections::HashSet;

use crate::error::{Result, StatsError};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Builds a table, rejecting empty column lists, duplicate names and ragged columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let first = columns
            .first()
            .ok_or_else(|| StatsError::InvalidShape("table has no columns".to_owned()))?;
        let n_rows = first.len();

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(StatsError::DuplicateColumn(column.name().to_owned()));
            }
            if column.len() != n_rows {
                return Err(StatsError::LengthMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, n_rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| StatsError::ColumnNotFound(name.to_owned()))
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_owned()).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn kind(&self) -> TableKind {
        classify(self)
    }

    /// New table holding only `rows`, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            columns: self.columns.iter().map(|c| c.select(rows)).collect(),
            n_rows: rows.len(),
        }
    }

    pub(crate) fn from_parts(columns: Vec<Column>, n_rows: usize) -> Self {
        Self { columns, n_rows }
    }
}

impl TryFrom<Vec<Column>> for Table {
    type Error = StatsError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::new(columns)
    }
}
