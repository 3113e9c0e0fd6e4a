// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discretization of continuous columns into labeled bins.
//!
//! Two partitioning schemes are supported:
//!
//! - **Equal width** (`EW`): `num_bins` intervals of identical width over `[min, max]`.
//! - **Equal frequency** (`EF`): cut points at evenly spaced positions of the sorted values.
//!
//! Cut points split the real line into half-open intervals `(-inf, c1]`, `(c1, c2]`, ...,
//! `(ck, +inf)`; a value equal to a cut point falls into the lower interval. The binned
//! column is categorical with levels `I1..I(k+1)` carrying their interval, so it feeds the
//! mutual-information path like any other categorical column.

pub mod binning;
pub mod labels;

pub use binning::{equal_frequency_cut_points, equal_width_cut_points};
pub use labels::{bin_index, bin_levels, interval_labels, label_bins};

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::table::{Column, ColumnType, Table};

/// Partitioning scheme used to derive cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscretizationAlgorithm {
    #[default]
    #[serde(rename = "EW")]
    EqualWidth,
    #[serde(rename = "EF")]
    EqualFrequency,
}

impl FromStr for DiscretizationAlgorithm {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EW" => Ok(Self::EqualWidth),
            "EF" => Ok(Self::EqualFrequency),
            other => Err(StatsError::UnknownAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for DiscretizationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EqualWidth => "EW",
            Self::EqualFrequency => "EF",
        })
    }
}

impl DiscretizationAlgorithm {
    pub fn cut_points(self, values: ArrayView1<'_, f64>, num_bins: usize) -> Result<Vec<f64>> {
        match self {
            Self::EqualWidth => equal_width_cut_points(values, num_bins),
            Self::EqualFrequency => equal_frequency_cut_points(values, num_bins),
        }
    }
}

/// A column after discretization together with the cut points that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizedColumn {
    pub column: Column,
    pub cut_points: Vec<f64>,
}

/// Equal-width discretization of a numeric column.
///
/// Non-numeric columns are returned unchanged with no cut points.
pub fn discretize_equal_width(column: &Column, num_bins: usize) -> Result<DiscretizedColumn> {
    discretize_column(column, num_bins, DiscretizationAlgorithm::EqualWidth)
}

/// Equal-frequency discretization of a numeric column.
///
/// Non-numeric columns are returned unchanged with no cut points.
pub fn discretize_equal_frequency(column: &Column, num_bins: usize) -> Result<DiscretizedColumn> {
    discretize_column(column, num_bins, DiscretizationAlgorithm::EqualFrequency)
}

pub fn discretize_column(
    column: &Column,
    num_bins: usize,
    algorithm: DiscretizationAlgorithm,
) -> Result<DiscretizedColumn> {
    let Some(values) = column.as_f64() else {
        return Ok(DiscretizedColumn {
            column: column.clone(),
            cut_points: Vec::new(),
        });
    };
    if values.iter().any(|x| !x.is_finite()) {
        return Err(StatsError::NonFinite(column.name().to_owned()));
    }
    let cut_points = algorithm.cut_points(values.view(), num_bins)?;
    tracing::trace!(column = column.name(), %algorithm, ?cut_points, "binned column");
    let binned = label_bins(values.view(), &cut_points);
    Ok(DiscretizedColumn {
        column: Column::categorical(column.name(), binned),
        cut_points,
    })
}

/// A table after discretization plus the cut points used per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Discretized {
    pub table: Table,
    /// One entry per column, in column order; empty for columns left untouched.
    pub cut_points: Vec<Vec<f64>>,
}

/// Discretizes every continuous column of `table`; other columns pass through unchanged.
///
/// The input table is left untouched and a fresh table is returned. The bin count is
/// validated before any column is processed.
pub fn discretize(
    table: &Table,
    num_bins: usize,
    algorithm: DiscretizationAlgorithm,
) -> Result<Discretized> {
    if num_bins == 0 {
        return Err(StatsError::InvalidBinCount(num_bins));
    }
    tracing::debug!(%algorithm, num_bins, columns = table.n_cols(), "discretizing table");

    let (columns, cut_points): (Vec<Column>, Vec<Vec<f64>>) = table
        .columns()
        .iter()
        .map(|column| {
            if column.column_type() == ColumnType::Continuous {
                discretize_column(column, num_bins, algorithm)
                    .map(|d| (d.column, d.cut_points))
            } else {
                Ok((column.clone(), Vec::new()))
            }
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    Ok(Discretized {
        table: Table::from_parts(columns, table.n_rows()),
        cut_points,
    })
}
