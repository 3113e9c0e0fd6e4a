// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ROC curve and area under it for a probability score against a boolean label.

use ndarray::Array1;

use crate::error::{Result, StatsError};
use crate::table::{ColumnData, Table};

/// ROC curve with one point per distinct score, ordered by increasing threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub auc: f64,
    pub thresholds: Vec<f64>,
    pub tpr: Vec<f64>,
    pub fpr: Vec<f64>,
}

/// Area under the ROC curve of `table`, see [`roc_curve`].
pub fn auc(table: &Table) -> Result<f64> {
    roc_curve(table).map(|curve| curve.auc)
}

/// ROC curve of a table holding exactly one boolean label column and one continuous
/// score column with values in `[0, 1]`.
///
/// Every distinct score is used as a cutoff, from low to high; rows with a score `>=` the
/// cutoff are predicted positive. The area is the right-endpoint sum
/// `Σ TPR_i · |FPR_i - FPR_{i+1}|` with a trailing `FPR = 0`.
///
/// Labels of a single class leave TPR or FPR undefined and are rejected with
/// [`StatsError::SingleClass`].
pub fn roc_curve(table: &Table) -> Result<RocCurve> {
    let (labels, scores) = split_label_score(table)?;

    let positives = labels.iter().filter(|&&l| l).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(StatsError::SingleClass);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut thresholds = Vec::new();
    let mut tpr = Vec::new();
    let mut fpr = Vec::new();

    // Rows before `start` score below the current cutoff and are predicted negative.
    let mut start = 0;
    let (mut tp, mut fp) = (positives, negatives);
    while start < order.len() {
        let cutoff = scores[order[start]];
        thresholds.push(cutoff);
        tpr.push(tp as f64 / positives as f64);
        fpr.push(fp as f64 / negatives as f64);

        while start < order.len() && scores[order[start]] == cutoff {
            if labels[order[start]] {
                tp -= 1;
            } else {
                fp -= 1;
            }
            start += 1;
        }
    }
    tracing::trace!(thresholds = thresholds.len(), "built ROC curve");

    let auc = tpr
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let next = fpr.get(i + 1).copied().unwrap_or(0.0);
            t * (fpr[i] - next).abs()
        })
        .sum();

    Ok(RocCurve {
        auc,
        thresholds,
        tpr,
        fpr,
    })
}

fn split_label_score(table: &Table) -> Result<(Array1<bool>, Array1<f64>)> {
    let mut label_columns = Vec::new();
    let mut others = Vec::new();
    for column in table.columns() {
        match column.data() {
            ColumnData::Boolean(v) => label_columns.push(v),
            _ => others.push(column),
        }
    }
    let ([labels], [score_column]) = (label_columns.as_slice(), others.as_slice()) else {
        return Err(StatsError::AucLayout {
            booleans: label_columns.len(),
            scores: others.len(),
        });
    };

    let ColumnData::Float(scores) = score_column.data() else {
        return Err(StatsError::TypeMismatch {
            column: score_column.name().to_owned(),
            expected: "continuous",
            found: score_column.column_type(),
        });
    };
    if let Some(&value) = scores.iter().find(|&&s| !(0.0..=1.0).contains(&s)) {
        return Err(StatsError::ScoreOutOfRange {
            column: score_column.name().to_owned(),
            value,
        });
    }
    Ok(((*labels).clone(), scores.clone()))
}
