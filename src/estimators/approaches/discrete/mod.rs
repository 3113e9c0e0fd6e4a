// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: groups all discrete-related submodules
// and exposes them to the parent approaches module.

pub mod discrete_utils;
pub mod mle;

use std::collections::{BTreeMap, HashMap};

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::{
    DiscreteDataset, reduce_joint_space_compact,
};
use crate::estimators::entropy::entropy_from_probabilities;
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Discrete Mutual Information estimator using the entropy-summation formula
/// `I(X;Y) = H(X) + H(Y) - H(X,Y)`.
///
/// The joint entropy is accumulated over the partition of rows by the value of `y`:
/// each partition contributes the entropy of its joint masses `p(x, y = v)`, which are
/// weighted by the total row count rather than the partition size.
pub struct DiscreteMutualInformation {
    x: DiscreteDataset,
    y: DiscreteDataset,
    h_joint: f64,
}

impl DiscreteMutualInformation {
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    pub fn new(x: Array1<i32>, y: Array1<i32>) -> Self {
        assert_eq!(
            x.len(),
            y.len(),
            "Mutual information requires aligned series of equal length"
        );
        let h_joint = partitioned_joint_entropy(&x, &y);
        Self {
            x: DiscreteDataset::from_data(x),
            y: DiscreteDataset::from_data(y),
            h_joint,
        }
    }

    pub fn marginal_entropies(&self) -> (f64, f64) {
        (
            entropy_from_probabilities(&self.x.probabilities(), false),
            entropy_from_probabilities(&self.y.probabilities(), false),
        )
    }

    pub fn joint_entropy(&self) -> f64 {
        self.h_joint
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        let (h_x, h_y) = self.marginal_entropies();
        h_x + h_y - self.h_joint
    }
}

impl LocalValues for DiscreteMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        // i(x,y) = ln p(x,y) - ln p(x) - ln p(y)
        let joint =
            DiscreteDataset::from_data(reduce_joint_space_compact(&self.x.data, &self.y.data));
        joint.map_probs().mapv(f64::ln)
            - self.x.map_probs().mapv(f64::ln)
            - self.y.map_probs().mapv(f64::ln)
    }
}

fn partitioned_joint_entropy(x: &Array1<i32>, y: &Array1<i32>) -> f64 {
    let n = x.len() as f64;
    let mut x_levels: Vec<i32> = x.iter().copied().collect();
    x_levels.sort_unstable();
    x_levels.dedup();

    let mut partitions: BTreeMap<i32, HashMap<i32, usize>> = BTreeMap::new();
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        *partitions.entry(yv).or_default().entry(xv).or_insert(0) += 1;
    }

    partitions
        .values()
        .map(|counts| {
            let masses: Array1<f64> = x_levels
                .iter()
                .map(|level| counts.get(level).map_or(0.0, |&c| c as f64 / n))
                .collect();
            entropy_from_probabilities(&masses, false)
        })
        .sum()
}
