// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table transformations that precede the statistics: feature scaling and threshold
//! filtering. Both return new tables.

pub mod filtering;
pub mod scaling;

pub use filtering::{CompareOp, Condition, apply_conditions};
pub use scaling::{ScalingOperation, feature_scaling, normalize, standardize};
