// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use rstest::rstest;
use tabstats::table::Column;
use tabstats::{ErrorCategory, StatsError, Table, auc, roc_curve};

use crate::test_helpers::{Rng, SeedableRng, StdRng};

fn label_score_table(labels: Vec<bool>, scores: Vec<f64>) -> Table {
    Table::new(vec![
        Column::boolean("label", labels),
        Column::float("score", scores),
    ])
    .unwrap()
}

#[rstest]
#[case(vec![false, false, true, true], vec![0.1, 0.2, 0.8, 0.9], 1.0)]
#[case(vec![true, false, false, true], vec![0.1, 0.2, 0.3, 0.4], 0.5)]
#[case(vec![true, true, false, false], vec![0.1, 0.2, 0.8, 0.9], 0.0)]
fn auc_of_small_tables(#[case] labels: Vec<bool>, #[case] scores: Vec<f64>, #[case] expected: f64) {
    let table = label_score_table(labels, scores);
    assert_abs_diff_eq!(auc(&table).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn roc_curve_points_follow_thresholds() {
    let table = label_score_table(vec![false, false, true, true], vec![0.1, 0.2, 0.8, 0.9]);
    let curve = roc_curve(&table).unwrap();
    assert_eq!(curve.thresholds, vec![0.1, 0.2, 0.8, 0.9]);
    assert_eq!(curve.tpr, vec![1.0, 1.0, 1.0, 0.5]);
    assert_eq!(curve.fpr, vec![1.0, 0.5, 0.0, 0.0]);
    assert_abs_diff_eq!(curve.auc, 1.0, epsilon = 1e-12);
}

#[test]
fn tied_scores_share_one_threshold() {
    let table = label_score_table(vec![true, false, true, false], vec![0.5, 0.5, 0.9, 0.1]);
    let curve = roc_curve(&table).unwrap();
    assert_eq!(curve.thresholds, vec![0.1, 0.5, 0.9]);
    assert_eq!(curve.tpr.len(), 3);
}

#[test]
fn column_order_does_not_matter() {
    let table = Table::new(vec![
        Column::float("score", vec![0.1, 0.2, 0.8, 0.9]),
        Column::boolean("label", vec![false, false, true, true]),
    ])
    .unwrap();
    assert_abs_diff_eq!(auc(&table).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn random_scores_are_close_to_chance() {
    let mut rng = StdRng::seed_from_u64(2024);
    let labels: Vec<bool> = (0..2000).map(|_| rng.gen_bool(0.5)).collect();
    let scores: Vec<f64> = (0..2000).map(|_| rng.gen_range(0.0..1.0)).collect();
    let value = auc(&label_score_table(labels, scores)).unwrap();
    assert!((value - 0.5).abs() < 0.05, "AUC {value} too far from 0.5");
}

#[test]
fn single_class_is_degenerate() {
    let table = label_score_table(vec![true, true, true], vec![0.2, 0.4, 0.6]);
    let err = auc(&table).unwrap_err();
    assert_eq!(err, StatsError::SingleClass);
    assert_eq!(err.category(), ErrorCategory::Degenerate);
}

#[test]
fn score_outside_unit_interval_is_rejected() {
    let table = label_score_table(vec![true, false], vec![0.2, 1.5]);
    assert_eq!(
        auc(&table).unwrap_err(),
        StatsError::ScoreOutOfRange {
            column: "score".to_owned(),
            value: 1.5
        }
    );
}

#[test]
fn wrong_layout_is_rejected() {
    let table = Table::new(vec![
        Column::boolean("a", vec![true, false]),
        Column::boolean("b", vec![false, true]),
    ])
    .unwrap();
    let err = auc(&table).unwrap_err();
    assert_eq!(
        err,
        StatsError::AucLayout {
            booleans: 2,
            scores: 0
        }
    );
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);
}

#[test]
fn integer_scores_are_rejected() {
    let table = Table::new(vec![
        Column::boolean("label", vec![true, false]),
        Column::integer("score", vec![0_i64, 1]),
    ])
    .unwrap();
    assert!(matches!(auc(&table), Err(StatsError::TypeMismatch { .. })));
}
