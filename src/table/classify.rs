// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::table::{ColumnType, Table};

/// Whole-table classification that gates which statistic applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Every column is continuous.
    Continuous,
    /// Every column is discrete, categorical or boolean.
    CategoricalLike,
    /// Anything else, e.g. floats next to booleans or labels.
    Mixed,
}

pub fn classify(table: &Table) -> TableKind {
    let types = || table.columns().iter().map(|c| c.column_type());
    if types().all(|t| t == ColumnType::Continuous) {
        TableKind::Continuous
    } else if types().all(|t| t != ColumnType::Continuous) {
        TableKind::CategoricalLike
    } else {
        TableKind::Mixed
    }
}

/// All columns continuous, or all columns discrete.
pub fn is_numeric(table: &Table) -> bool {
    let types = || table.columns().iter().map(|c| c.column_type());
    types().all(|t| t == ColumnType::Continuous) || types().all(|t| t == ColumnType::Discrete)
}

pub fn is_continuous(table: &Table) -> bool {
    classify(table) == TableKind::Continuous
}
