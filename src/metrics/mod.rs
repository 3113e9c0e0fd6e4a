// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-column metrics chosen by column type.
//!
//! [`calc_metrics`] routes a table, in priority order, to:
//!
//! 1. **AUC** when the table is exactly one boolean label and one continuous score column
//! 2. **Variance** per column when every column is continuous
//! 3. **Entropy** per column when every column is discrete or categorical
//! 4. A **blend**: variance for continuous columns, entropy for everything else

pub mod roc;
pub mod variance;

pub use roc::{RocCurve, auc, roc_curve};
pub use variance::{VarianceKind, variance, variance_of};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::estimators::entropy::entropy;
use crate::table::{Column, ColumnType, Table, TableKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Variance,
    Entropy,
}

/// A metric computed for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetric {
    pub column: String,
    pub kind: MetricKind,
    pub value: f64,
}

/// Result of [`calc_metrics`], aligned with the table's column order.
#[derive(Debug, Clone, PartialEq)]
pub enum Metrics {
    Auc(f64),
    Variance(Vec<ColumnMetric>),
    Entropy(Vec<ColumnMetric>),
    Blended(Vec<ColumnMetric>),
}

impl Metrics {
    /// Per-column values, or `None` for an AUC result.
    pub fn column_values(&self) -> Option<Vec<f64>> {
        match self {
            Self::Auc(_) => None,
            Self::Variance(m) | Self::Entropy(m) | Self::Blended(m) => {
                Some(m.iter().map(|c| c.value).collect())
            }
        }
    }
}

/// Metrics with default options: population variance and raw entropy.
pub fn calc_metrics(table: &Table) -> Result<Metrics> {
    calc_metrics_with(table, &AnalysisConfig::default())
}

/// Metrics using the variance kind and entropy normalization of `config`.
///
/// The binning fields of `config` play no part here and are not checked.
pub fn calc_metrics_with(table: &Table, config: &AnalysisConfig) -> Result<Metrics> {
    let count = |t: ColumnType| {
        table
            .columns()
            .iter()
            .filter(|c| c.column_type() == t)
            .count()
    };
    let booleans = count(ColumnType::Boolean);
    let continuous = count(ColumnType::Continuous);

    if booleans == 1 && continuous == 1 && table.n_cols() == 2 {
        tracing::debug!("routing table to AUC");
        return auc(table).map(Metrics::Auc);
    }

    let per_column = |kind_of: &dyn Fn(&Column) -> MetricKind| {
        table
            .columns()
            .iter()
            .map(|c| column_metric(c, kind_of(c), config))
            .collect::<Result<Vec<_>>>()
    };

    match table.kind() {
        TableKind::Continuous => {
            tracing::debug!("routing table to variance");
            per_column(&|_| MetricKind::Variance).map(Metrics::Variance)
        }
        TableKind::CategoricalLike if booleans == 0 => {
            tracing::debug!("routing table to entropy");
            per_column(&|_| MetricKind::Entropy).map(Metrics::Entropy)
        }
        _ => {
            tracing::debug!("routing mixed table to blended metrics");
            per_column(&|c| {
                if c.column_type() == ColumnType::Continuous {
                    MetricKind::Variance
                } else {
                    MetricKind::Entropy
                }
            })
            .map(Metrics::Blended)
        }
    }
}

fn column_metric(
    column: &Column,
    kind: MetricKind,
    config: &AnalysisConfig,
) -> Result<ColumnMetric> {
    let value = match kind {
        MetricKind::Variance => variance(column, config.variance_kind)?,
        MetricKind::Entropy => entropy(column, config.normalize_entropy)?,
    };
    Ok(ColumnMetric {
        column: column.name().to_owned(),
        kind,
        value,
    })
}
