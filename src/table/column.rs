// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fmt;

use ndarray::Array1;

use crate::error::{Result, StatsError};
use crate::estimators::approaches::discrete::discrete_utils::compact_codes;

/// Semantic type of a column, fixed when the column is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Floating point values.
    Continuous,
    /// Integer values.
    Discrete,
    /// Labels drawn from a finite, declared level set.
    Categorical,
    /// True/false values.
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Continuous => "continuous",
            Self::Discrete => "discrete",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Categorical data: `i32` codes indexing into an ordered list of declared levels.
///
/// The declared levels may contain levels that never occur in the data. Entropy
/// normalization uses the declared level count, not the observed one.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    codes: Array1<i32>,
    levels: Vec<String>,
}

impl Categorical {
    /// Builds a categorical from raw codes and their level names.
    ///
    /// Every code must index into `levels`.
    pub fn new(codes: Array1<i32>, levels: Vec<String>) -> Result<Self> {
        if let Some(&bad) = codes
            .iter()
            .find(|&&c| c < 0 || c as usize >= levels.len())
        {
            return Err(StatsError::InvalidShape(format!(
                "categorical code {bad} outside of {} declared levels",
                levels.len()
            )));
        }
        Ok(Self { codes, levels })
    }

    /// Builds a categorical whose levels are the sorted distinct labels.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let levels: Vec<String> = labels
            .iter()
            .map(|l| l.as_ref().to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let codes = labels
            .iter()
            .map(|l| {
                levels
                    .binary_search_by(|lvl| lvl.as_str().cmp(l.as_ref()))
                    .map_or(0, |i| i as i32)
            })
            .collect();
        Self { codes, levels }
    }

    /// Builds a categorical against an explicit level set, which may include levels
    /// that do not occur in `labels`.
    pub fn with_levels<S: AsRef<str>>(labels: &[S], levels: Vec<String>) -> Result<Self> {
        let codes = labels
            .iter()
            .map(|l| {
                levels
                    .iter()
                    .position(|lvl| lvl == l.as_ref())
                    .map(|i| i as i32)
                    .ok_or_else(|| {
                        StatsError::InvalidShape(format!(
                            "label '{}' is not a declared level",
                            l.as_ref()
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            codes: Array1::from(codes),
            levels,
        })
    }

    /// Codes must already index into `levels`.
    pub(crate) fn from_parts(codes: Array1<i32>, levels: Vec<String>) -> Self {
        debug_assert!(codes.iter().all(|&c| c >= 0 && (c as usize) < levels.len()));
        Self { codes, levels }
    }

    pub fn codes(&self) -> &Array1<i32> {
        &self.codes
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Label of the value in row `row`.
    pub fn label(&self, row: usize) -> Option<&str> {
        self.codes
            .get(row)
            .map(|&c| self.levels[c as usize].as_str())
    }
}

/// Column storage, tagged by semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float(Array1<f64>),
    Integer(Array1<i64>),
    Boolean(Array1<bool>),
    Categorical(Categorical),
}

/// Discrete view of a column: compact symbol codes and the level count used for
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbols {
    pub codes: Array1<i32>,
    pub level_count: usize,
}

/// A named column of a [`crate::table::Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn float(name: impl Into<String>, values: impl Into<Array1<f64>>) -> Self {
        Self::new(name, ColumnData::Float(values.into()))
    }

    pub fn integer(name: impl Into<String>, values: impl Into<Array1<i64>>) -> Self {
        Self::new(name, ColumnData::Integer(values.into()))
    }

    pub fn boolean(name: impl Into<String>, values: impl Into<Array1<bool>>) -> Self {
        Self::new(name, ColumnData::Boolean(values.into()))
    }

    pub fn categorical(name: impl Into<String>, categorical: Categorical) -> Self {
        Self::new(name, ColumnData::Categorical(categorical))
    }

    /// Categorical column whose levels are the distinct labels.
    pub fn from_labels<S: AsRef<str>>(name: impl Into<String>, labels: &[S]) -> Self {
        Self::categorical(name, Categorical::from_labels(labels))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn column_type(&self) -> ColumnType {
        match &self.data {
            ColumnData::Float(_) => ColumnType::Continuous,
            ColumnData::Integer(_) => ColumnType::Discrete,
            ColumnData::Boolean(_) => ColumnType::Boolean,
            ColumnData::Categorical(_) => ColumnType::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Float(v) => v.len(),
            ColumnData::Integer(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Categorical(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Float or integer columns as `f64` values, `None` for anything else.
    pub fn as_f64(&self) -> Option<Array1<f64>> {
        match &self.data {
            ColumnData::Float(v) => Some(v.clone()),
            ColumnData::Integer(v) => Some(v.mapv(|x| x as f64)),
            _ => None,
        }
    }

    /// Numeric values or a type-mismatch error naming the caller's expectation.
    pub(crate) fn numeric_values(&self) -> Result<Array1<f64>> {
        self.as_f64().ok_or_else(|| StatsError::TypeMismatch {
            column: self.name.clone(),
            expected: "continuous or discrete",
            found: self.column_type(),
        })
    }

    /// Encodes the column as discrete symbols.
    ///
    /// Categorical columns keep their codes and declared level count. Every other type
    /// treats each distinct value as its own level.
    pub fn symbols(&self) -> Symbols {
        match &self.data {
            ColumnData::Categorical(c) => Symbols {
                codes: c.codes().clone(),
                level_count: c.levels().len(),
            },
            ColumnData::Float(v) => observed(compact_codes(v.iter().map(|&x| float_key(x)))),
            ColumnData::Integer(v) => observed(compact_codes(v.iter().copied())),
            ColumnData::Boolean(v) => observed(compact_codes(v.iter().copied())),
        }
    }

    /// Copy of the column restricted to `rows`, in the given order.
    pub fn select(&self, rows: &[usize]) -> Self {
        let data = match &self.data {
            ColumnData::Float(v) => ColumnData::Float(rows.iter().map(|&i| v[i]).collect()),
            ColumnData::Integer(v) => ColumnData::Integer(rows.iter().map(|&i| v[i]).collect()),
            ColumnData::Boolean(v) => ColumnData::Boolean(rows.iter().map(|&i| v[i]).collect()),
            ColumnData::Categorical(c) => ColumnData::Categorical(Categorical::from_parts(
                rows.iter().map(|&i| c.codes[i]).collect(),
                c.levels.clone(),
            )),
        };
        Self::new(self.name.clone(), data)
    }
}

fn observed(codes: Array1<i32>) -> Symbols {
    let level_count = codes.iter().max().map_or(0, |&m| m as usize + 1);
    Symbols { codes, level_count }
}

// 0.0 and -0.0 are the same level.
fn float_key(x: f64) -> u64 {
    if x == 0.0 { 0 } else { x.to_bits() }
}
