// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every operation of the crate.
//!
//! Each [`StatsError`] variant belongs to exactly one [`ErrorCategory`], so callers can
//! distinguish a malformed input shape from a statistical precondition that does not hold
//! and from an unsupported configuration without inspecting messages.

use crate::table::ColumnType;
use thiserror::Error;

/// Coarse classification of a [`StatsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input cannot be coerced into a well-formed table.
    Shape,
    /// The statistic was invoked on data of the wrong kind.
    TypeMismatch,
    /// The data is well-typed but numerically degenerate for the statistic.
    Degenerate,
    /// An option or configuration value is not supported.
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("input cannot be coerced into a table: {0}")]
    InvalidShape(String),

    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("{0} requires at least one value")]
    EmptyInput(&'static str),

    #[error("column '{column}' has type {found}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: ColumnType,
    },

    #[error("{operation} requires at least {required} values, got {actual}")]
    InsufficientSamples {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error(
        "AUC requires exactly one boolean label column and one score column, got {booleans} boolean and {scores} score columns"
    )]
    AucLayout { booleans: usize, scores: usize },

    #[error("score {value} in column '{column}' lies outside [0, 1]")]
    ScoreOutOfRange { column: String, value: f64 },

    #[error("column '{0}' contains non-finite values")]
    NonFinite(String),

    #[error("column '{0}' has zero variance")]
    ZeroVariance(String),

    #[error("column '{0}' has zero range")]
    ZeroRange(String),

    #[error("labels contain a single class, TPR/FPR are undefined")]
    SingleClass,

    #[error("{len} values cannot be split into {num_bins} equal-frequency bins")]
    InsufficientBins { len: usize, num_bins: usize },

    #[error("unknown discretization algorithm '{0}', expected EW or EF")]
    UnknownAlgorithm(String),

    #[error("unknown variance kind '{0}', expected population or sample")]
    UnknownVarianceKind(String),

    #[error("unknown scaling operation '{0}', expected normalize or standardize")]
    UnknownScaling(String),

    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),

    #[error("number of bins must be at least 1, got {0}")]
    InvalidBinCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StatsError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidShape(_)
            | Self::LengthMismatch { .. }
            | Self::DuplicateColumn(_)
            | Self::ColumnNotFound(_)
            | Self::EmptyInput(_) => ErrorCategory::Shape,
            Self::TypeMismatch { .. }
            | Self::InsufficientSamples { .. }
            | Self::AucLayout { .. }
            | Self::ScoreOutOfRange { .. }
            | Self::NonFinite(_) => ErrorCategory::TypeMismatch,
            Self::ZeroVariance(_)
            | Self::ZeroRange(_)
            | Self::SingleClass
            | Self::InsufficientBins { .. } => ErrorCategory::Degenerate,
            Self::UnknownAlgorithm(_)
            | Self::UnknownVarianceKind(_)
            | Self::UnknownScaling(_)
            | Self::UnknownOperator(_)
            | Self::InvalidBinCount(_)
            | Self::InvalidConfig(_) => ErrorCategory::Configuration,
        }
    }
}

pub type Result<T, E = StatsError> = std::result::Result<T, E>;
