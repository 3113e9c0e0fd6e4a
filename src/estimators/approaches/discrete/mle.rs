// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::entropy::entropy_from_probabilities;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Shannon entropy estimator for discrete data using maximum likelihood (natural log base).
///
/// Computes H = -Σ p_i ln p_i from empirical probabilities p_i = n_i/N. The level count
/// used by [`DiscreteEntropy::normalized`] is either the number of observed symbols or an
/// explicitly declared level count, which changes the normalizing `ln(k)`.
///
/// Local values are `-ln p(x)` per sample; their mean is the global entropy.
pub struct DiscreteEntropy {
    dataset: DiscreteDataset,
    normalize: bool,
}

impl DiscreteEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        Self {
            dataset: DiscreteDataset::from_data(data),
            normalize: false,
        }
    }

    /// Estimator over a declared level set that may include unobserved levels.
    pub fn with_level_count(data: Array1<i32>, level_count: usize) -> Self {
        Self {
            dataset: DiscreteDataset::with_level_count(data, level_count),
            normalize: false,
        }
    }

    /// Divide the global value by `ln(k)`, yielding a value in `[0, 1]` for `k > 1`.
    #[must_use]
    pub fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Number of levels used for normalization.
    pub fn level_count(&self) -> usize {
        self.dataset.k
    }

    /// Probability per level, including zero entries for unobserved declared levels.
    pub fn probabilities(&self) -> Array1<f64> {
        self.dataset.probabilities()
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        entropy_from_probabilities(&self.dataset.probabilities(), self.normalize)
    }
}

impl LocalValues for DiscreteEntropy {
    /// Local values are never normalized.
    fn local_values(&self) -> Array1<f64> {
        -self.dataset.map_probs().mapv(f64::ln)
    }
}
