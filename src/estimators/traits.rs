// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the per-sample contributions of the measure.
    fn local_values(&self) -> Array1<f64>;

    /// Derive the global value as the mean of the local values.
    ///
    /// Returns `NaN` for an estimator built from no samples.
    fn global_from_local(&self) -> f64 {
        self.local_values().mean().unwrap_or(f64::NAN)
    }
}
