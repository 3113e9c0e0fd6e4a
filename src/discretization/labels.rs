// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::table::Categorical;

/// Human-readable names of the `len(cut_points) + 1` half-open intervals.
///
/// ```
/// use tabstats::discretization::interval_labels;
///
/// assert_eq!(interval_labels(&[5.0]), vec!["( -infty ,5]", "(5 , infty )"]);
/// assert_eq!(interval_labels(&[]), vec!["( -infty , infty )"]);
/// ```
pub fn interval_labels(cut_points: &[f64]) -> Vec<String> {
    let (Some(first), Some(last)) = (cut_points.first(), cut_points.last()) else {
        return vec!["( -infty , infty )".to_owned()];
    };
    let mut labels = Vec::with_capacity(cut_points.len() + 1);
    labels.push(format!("( -infty ,{first}]"));
    labels.extend(
        cut_points
            .windows(2)
            .map(|w| format!("({},{}]", w[0], w[1])),
    );
    labels.push(format!("({last} , infty )"));
    labels
}

/// Level names `I1..I(k+1)` annotated with their interval, e.g. `I1:( -infty ,5]`.
pub fn bin_levels(cut_points: &[f64]) -> Vec<String> {
    interval_labels(cut_points)
        .into_iter()
        .enumerate()
        .map(|(i, interval)| format!("I{}:{interval}", i + 1))
        .collect()
}

/// Index of the bin holding `value`: the lowest cut point `>= value`, or the open-ended
/// last bin when the value exceeds every cut point.
///
/// A value equal to a cut point belongs to the lower interval.
pub fn bin_index(value: f64, cut_points: &[f64]) -> usize {
    cut_points
        .iter()
        .position(|&c| value <= c)
        .unwrap_or(cut_points.len())
}

/// Assigns every value to its bin and returns the categorical encoding.
///
/// All `len(cut_points) + 1` levels are declared, including bins no value falls into.
pub fn label_bins(values: ArrayView1<'_, f64>, cut_points: &[f64]) -> Categorical {
    let codes: Array1<i32> = values.mapv(|v| bin_index(v, cut_points) as i32);
    Categorical::from_parts(codes, bin_levels(cut_points))
}
