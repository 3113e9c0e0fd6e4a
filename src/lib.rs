// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tabstats
//!
//! Uniform statistics over heterogeneous (continuous, discrete, categorical, boolean)
//! tabular data: pairwise dependence, entropy, variance, AUC, discretization and feature
//! scaling, without hand-written type dispatch.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabstats::{Column, Table, correlation};
//! use tabstats::estimators::correlation::DependenceMeasure;
//!
//! let table = Table::new(vec![
//!     Column::float("Var1", vec![1.2, 1.0, 2.0, 1.0, 3.0]),
//!     Column::float("Var2", vec![5.4, 5.3, 5.4, 4.1, 5.2]),
//! ])
//! .unwrap();
//!
//! let matrix = correlation(&table).unwrap();
//! assert_eq!(matrix.measure(), DependenceMeasure::Pearson);
//! assert_eq!(matrix.get("Var1", "Var2"), matrix.get("Var2", "Var1"));
//! ```
//!
//! ## Type dispatch
//!
//! Every column carries a [`ColumnType`] fixed at construction. Whole-table decisions go
//! through [`table::classify`]:
//!
//! | Table | `correlation` | `calc_metrics` |
//! |-------|---------------|----------------|
//! | all continuous | Pearson | variance |
//! | all discrete | Pearson | entropy |
//! | categorical-like | mutual information | entropy |
//! | boolean label + continuous score | mutual information | AUC |
//! | mixed | mutual information | variance / entropy per column |
//!
//! ## Architecture
//!
//! 1. **Table layer** ([`table`]): columns, classification, coercion of raw vectors
//! 2. **Estimators** ([`estimators`]): entropy, mutual information, Pearson correlation
//! 3. **Discretization** ([`discretization`]): equal-width and equal-frequency binning
//! 4. **Metrics** ([`metrics`]): variance, ROC/AUC and the per-type dispatcher
//! 5. **Preprocessing** ([`preprocessing`]): feature scaling and threshold filtering
//!
//! All logarithms are natural (nats). Failures are reported as [`StatsError`], whose
//! [`StatsError::category`] separates shape, type, degenerate-numeric and configuration
//! problems. Dispatch decisions are logged through `tracing` at debug level.

pub mod config;
pub mod discretization;
pub mod error;
pub mod estimators;
pub mod metrics;
pub mod preprocessing;
pub mod table;

pub use config::AnalysisConfig;
pub use discretization::{DiscretizationAlgorithm, Discretized, discretize};
pub use error::{ErrorCategory, Result, StatsError};
pub use estimators::correlation::{PairwiseMatrix, correlation, pearson};
pub use estimators::entropy::entropy;
pub use estimators::mutual_information::mutual_information;
pub use estimators::{GlobalValue, LocalValues};
pub use metrics::{Metrics, RocCurve, VarianceKind, auc, calc_metrics, roc_curve, variance};
pub use preprocessing::{ScalingOperation, feature_scaling};
pub use table::{Categorical, Column, ColumnType, Table, coerce_to_table};
