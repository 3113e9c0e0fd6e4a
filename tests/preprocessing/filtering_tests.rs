// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::array;
use rstest::rstest;
use tabstats::preprocessing::{CompareOp, Condition, apply_conditions};
use tabstats::table::{Column, ColumnData};
use tabstats::{ErrorCategory, StatsError, Table};

fn sample_table() -> Table {
    Table::new(vec![
        Column::float("x", vec![1.0, 5.0, 3.0, 8.0]),
        Column::integer("n", vec![10_i64, 20, 30, 40]),
        Column::from_labels("c", &["a", "b", "a", "b"]),
    ])
    .unwrap()
}

#[test]
fn keep_filters_rows_across_all_columns() {
    let table = sample_table();
    let filtered = apply_conditions(&table, &[Condition::keep("x", CompareOp::Gt, 2.0)]).unwrap();
    assert_eq!(filtered.n_rows(), 3);
    assert_eq!(
        filtered.column("n").unwrap().data(),
        &ColumnData::Integer(array![20, 30, 40])
    );
    let ColumnData::Categorical(c) = filtered.column("c").unwrap().data() else {
        panic!("expected a categorical column");
    };
    assert_eq!(c.label(0), Some("b"));
    // Levels survive even when rows are dropped
    assert_eq!(c.levels().len(), 2);
    assert_eq!(table.n_rows(), 4);
}

#[test]
fn replace_overwrites_matching_values() {
    let table = sample_table();
    let replaced =
        apply_conditions(&table, &[Condition::replace("x", CompareOp::Ge, 5.0, 5.0)]).unwrap();
    assert_eq!(replaced.n_rows(), 4);
    assert_eq!(
        replaced.column("x").unwrap().data(),
        &ColumnData::Float(array![1.0, 5.0, 3.0, 5.0])
    );
    assert_eq!(replaced.column("n").unwrap(), table.column("n").unwrap());
}

#[test]
fn conditions_apply_in_order() {
    let table = sample_table();
    let conditions = [
        Condition::replace("n", CompareOp::Eq, 20.0, 35.0),
        Condition::keep("n", CompareOp::Gt, 25.0),
    ];
    let result = apply_conditions(&table, &conditions).unwrap();
    assert_eq!(
        result.column("n").unwrap().data(),
        &ColumnData::Integer(array![35, 30, 40])
    );
    assert_eq!(
        result.column("x").unwrap().data(),
        &ColumnData::Float(array![5.0, 3.0, 8.0])
    );
}

#[test]
fn no_conditions_returns_an_equal_table() {
    let table = sample_table();
    assert_eq!(apply_conditions(&table, &[]).unwrap(), table);
}

#[test]
fn fractional_replacement_for_integers_is_rejected() {
    let err = apply_conditions(
        &sample_table(),
        &[Condition::replace("n", CompareOp::Lt, 15.0, 2.5)],
    )
    .unwrap_err();
    assert!(matches!(err, StatsError::TypeMismatch { ref column, .. } if column == "n"));
}

#[test]
fn unknown_and_non_numeric_columns_are_rejected() {
    let table = sample_table();
    let err =
        apply_conditions(&table, &[Condition::keep("missing", CompareOp::Lt, 1.0)]).unwrap_err();
    assert_eq!(err, StatsError::ColumnNotFound("missing".to_owned()));
    assert_eq!(err.category(), ErrorCategory::Shape);

    let err = apply_conditions(&table, &[Condition::keep("c", CompareOp::Lt, 1.0)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);
}

#[rstest]
#[case("<", CompareOp::Lt, 1.0, true)]
#[case(">", CompareOp::Gt, 1.0, false)]
#[case("<=", CompareOp::Le, 2.0, true)]
#[case(">=", CompareOp::Ge, 2.0, true)]
#[case("==", CompareOp::Eq, 2.0, true)]
#[case("!=", CompareOp::Ne, 2.0, false)]
fn operators_parse_and_compare(
    #[case] symbol: &str,
    #[case] op: CompareOp,
    #[case] threshold: f64,
    #[case] holds_for_zero_or_two: bool,
) {
    assert_eq!(symbol.parse::<CompareOp>().unwrap(), op);
    let value = if threshold == 1.0 { 0.0 } else { 2.0 };
    assert_eq!(op.holds(value, threshold), holds_for_zero_or_two);
}

#[test]
fn unknown_operator_is_a_configuration_error() {
    let err = "=~".parse::<CompareOp>().unwrap_err();
    assert_eq!(err, StatsError::UnknownOperator("=~".to_owned()));
    assert_eq!(err.category(), ErrorCategory::Configuration);
}
