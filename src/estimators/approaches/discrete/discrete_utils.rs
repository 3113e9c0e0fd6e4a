// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::HashMap;
use std::hash::Hash;

/// Shared dataset for the discrete (histogram-based) estimators.
pub struct DiscreteDataset {
    /// Symbol codes (1D)
    pub data: Array1<i32>,
    /// Counts per observed symbol
    pub counts: HashMap<i32, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of levels used for normalization; at least the number of observed symbols
    pub k: usize,
    /// Probability dictionary p(x) for each observed symbol
    pub dist: HashMap<i32, f64>,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset whose levels are the observed symbols.
    pub fn from_data(data: Array1<i32>) -> Self {
        Self::with_level_count(data, 0)
    }

    /// Build a DiscreteDataset over a declared level set of size `level_count`.
    ///
    /// Declared levels that never occur contribute a zero probability. A count smaller
    /// than the number of observed symbols is raised to it.
    pub fn with_level_count(data: Array1<i32>, level_count: usize) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = level_count.max(counts.len());
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(counts.len());
        for (val, cnt) in counts.iter() {
            dist.insert(*val, *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Probability vector over all `k` levels, observed symbols first in ascending code
    /// order, then one zero per unobserved declared level.
    pub fn probabilities(&self) -> Array1<f64> {
        let mut symbols: Vec<i32> = self.counts.keys().copied().collect();
        symbols.sort_unstable();
        let mut probs: Vec<f64> = symbols.iter().map(|s| self.dist[s]).collect();
        probs.resize(self.k, 0.0);
        Array1::from(probs)
    }

    /// Map each sample to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.mapv(|v| self.dist[&v])
    }
}

/// Count the occurrences of each value in an array.
/// Uses a dense vector for small non-negative ranges, otherwise falls back to HashMap.
pub fn count_frequencies(data: &Array1<i32>) -> HashMap<i32, usize> {
    if data.is_empty() {
        return HashMap::new();
    }

    let mut min_v = i32::MAX;
    let mut max_v = i32::MIN;
    for &v in data.iter() {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    // Compact codes from `compact_codes` always land in the dense branch.
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in data.iter() {
            dense[(v - min_v) as usize] += 1;
        }
        return dense
            .iter()
            .enumerate()
            .filter(|&(_, &cnt)| cnt != 0)
            .map(|(i, &cnt)| (min_v + i as i32, cnt))
            .collect();
    }

    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Map arbitrary hashable keys onto compact `i32` codes `0..k`.
///
/// Codes are assigned in first-occurrence order for determinism, so the largest code
/// plus one is the number of distinct keys.
pub fn compact_codes<K, I>(keys: I) -> Array1<i32>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut map: HashMap<K, i32> = HashMap::new();
    let mut next_id: i32 = 0;
    let out: Vec<i32> = keys
        .into_iter()
        .map(|key| {
            *map.entry(key).or_insert_with(|| {
                let v = next_id;
                next_id += 1;
                v
            })
        })
        .collect();
    Array1::from(out)
}

/// Reduce two aligned code arrays into a single compact joint code space.
///
/// Each position's `(x, y)` pair is mapped to a unique compact code.
///
/// # Panics
///
/// Panics if the arrays differ in length.
pub fn reduce_joint_space_compact(x: &Array1<i32>, y: &Array1<i32>) -> Array1<i32> {
    assert_eq!(
        x.len(),
        y.len(),
        "All code arrays must have the same length for joint reduction"
    );
    compact_codes(x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)))
}
