// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use crate::error::{Result, StatsError};
use crate::table::{Column, ColumnData, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Lt => value < threshold,
            Self::Gt => value > threshold,
            Self::Le => value <= threshold,
            Self::Ge => value >= threshold,
            Self::Eq => value == threshold,
            Self::Ne => value != threshold,
        }
    }
}

impl FromStr for CompareOp {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            "<=" => Ok(Self::Le),
            ">=" => Ok(Self::Ge),
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            other => Err(StatsError::UnknownOperator(other.to_owned())),
        }
    }
}

/// A threshold condition on one numeric column.
///
/// Without a replacement the condition filters rows, keeping those where it holds. With
/// a replacement the matching values of `column` are overwritten instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub op: CompareOp,
    pub threshold: f64,
    pub replacement: Option<f64>,
}

impl Condition {
    pub fn keep(column: impl Into<String>, op: CompareOp, threshold: f64) -> Self {
        Self {
            column: column.into(),
            op,
            threshold,
            replacement: None,
        }
    }

    pub fn replace(column: impl Into<String>, op: CompareOp, threshold: f64, value: f64) -> Self {
        Self {
            column: column.into(),
            op,
            threshold,
            replacement: Some(value),
        }
    }
}

/// Applies `conditions` in order and returns the resulting table.
///
/// Each condition is validated against the table it is applied to; the input table is
/// never modified.
pub fn apply_conditions(table: &Table, conditions: &[Condition]) -> Result<Table> {
    conditions
        .iter()
        .try_fold(table.clone(), |current, condition| apply(&current, condition))
}

fn apply(table: &Table, condition: &Condition) -> Result<Table> {
    let target = table.column(&condition.column)?;
    let values = target.numeric_values()?;
    let matches: Vec<bool> = values
        .iter()
        .map(|&v| condition.op.holds(v, condition.threshold))
        .collect();

    let Some(replacement) = condition.replacement else {
        let rows: Vec<usize> = (0..matches.len()).filter(|&i| matches[i]).collect();
        tracing::trace!(column = %condition.column, kept = rows.len(), "filtered rows");
        return Ok(table.select_rows(&rows));
    };

    let replaced = replace_matching(target, &matches, replacement)?;
    let columns = table
        .columns()
        .iter()
        .map(|c| {
            if c.name() == condition.column {
                replaced.clone()
            } else {
                c.clone()
            }
        })
        .collect();
    Ok(Table::from_parts(columns, table.n_rows()))
}

fn replace_matching(column: &Column, matches: &[bool], replacement: f64) -> Result<Column> {
    let data = match column.data() {
        ColumnData::Float(v) => ColumnData::Float(
            v.iter()
                .zip(matches)
                .map(|(&x, &m)| if m { replacement } else { x })
                .collect(),
        ),
        ColumnData::Integer(v) => {
            if replacement.fract() != 0.0 || !replacement.is_finite() {
                return Err(StatsError::TypeMismatch {
                    column: column.name().to_owned(),
                    expected: "integral replacement",
                    found: column.column_type(),
                });
            }
            ColumnData::Integer(
                v.iter()
                    .zip(matches)
                    .map(|(&x, &m)| if m { replacement as i64 } else { x })
                    .collect(),
            )
        }
        // numeric_values() already rejected the other column types
        other => other.clone(),
    };
    Ok(Column::new(column.name(), data))
}
