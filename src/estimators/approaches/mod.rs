// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;

// Re-exports so tests and users can import
// tabstats::estimators::approaches::* ergonomically.
pub use discrete::DiscreteMutualInformation;
pub use discrete::mle::DiscreteEntropy;
