// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::error::{Result, StatsError};

/// Cut points splitting `[min, max]` into `num_bins` intervals of equal width.
///
/// Produces exactly `num_bins - 1` interior cut points `min + i * step`.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use tabstats::discretization::equal_width_cut_points;
///
/// let x = array![0.0, 2.5, 10.0];
/// assert_eq!(equal_width_cut_points(x.view(), 2).unwrap(), vec![5.0]);
/// ```
pub fn equal_width_cut_points(values: ArrayView1<'_, f64>, num_bins: usize) -> Result<Vec<f64>> {
    check_bins(num_bins)?;
    let (min, max) = min_max(values)?;
    let step = (max - min) / num_bins as f64;
    Ok((1..num_bins).map(|i| min + step * i as f64).collect())
}

/// Cut points placing roughly the same number of values in each bin.
///
/// With `freq = round(n / num_bins)` (ties to even), the cut points are the sorted values
/// at positions `freq, 2 * freq, ...` strictly before the end. A request that yields a
/// single cut point, or none while more than one bin was asked for, has no real partition
/// and fails with [`StatsError::InsufficientBins`].
pub fn equal_frequency_cut_points(
    values: ArrayView1<'_, f64>,
    num_bins: usize,
) -> Result<Vec<f64>> {
    check_bins(num_bins)?;
    min_max(values)?;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let insufficient = StatsError::InsufficientBins { len: n, num_bins };

    let freq = (n as f64 / num_bins as f64).round_ties_even() as usize;
    if freq == 0 {
        return Err(insufficient);
    }
    let cut_points: Vec<f64> = (freq..n).step_by(freq).map(|i| sorted[i]).collect();
    match cut_points.len() {
        1 => Err(insufficient),
        0 if num_bins > 1 => Err(insufficient),
        _ => Ok(cut_points),
    }
}

fn check_bins(num_bins: usize) -> Result<()> {
    if num_bins == 0 {
        return Err(StatsError::InvalidBinCount(num_bins));
    }
    Ok(())
}

fn min_max(values: ArrayView1<'_, f64>) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("discretization"));
    }
    Ok(values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}
