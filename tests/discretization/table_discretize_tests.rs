// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use tabstats::estimators::correlation::DependenceMeasure;
use tabstats::table::{Column, ColumnType, TableKind};
use tabstats::{DiscretizationAlgorithm, StatsError, Table, correlation, discretize};

use crate::test_helpers::{mixed_table, var1_var2_table};

#[test]
fn only_continuous_columns_are_binned() {
    let table = mixed_table();
    let result = discretize(&table, 2, DiscretizationAlgorithm::EqualWidth).unwrap();

    assert_eq!(result.table.names(), table.names());
    assert_eq!(result.cut_points.len(), 4);
    assert_eq!(result.cut_points[0].len(), 1);
    assert_abs_diff_eq!(result.cut_points[0][0], 1.7, epsilon = 1e-12);
    assert!(result.cut_points[1..].iter().all(Vec::is_empty));

    let types: Vec<ColumnType> = result.table.columns().iter().map(Column::column_type).collect();
    assert_eq!(
        types,
        vec![
            ColumnType::Categorical,
            ColumnType::Discrete,
            ColumnType::Categorical,
            ColumnType::Boolean
        ]
    );
    assert_eq!(
        result.table.column("visits").unwrap(),
        table.column("visits").unwrap()
    );
    // The input is left untouched
    assert_eq!(
        table.column("height").unwrap().column_type(),
        ColumnType::Continuous
    );
}

#[test]
fn discretized_continuous_table_switches_to_mutual_information() {
    let result = discretize(&var1_var2_table(), 2, DiscretizationAlgorithm::EqualWidth).unwrap();
    assert_eq!(result.table.kind(), TableKind::CategoricalLike);
    let matrix = correlation(&result.table).unwrap();
    assert_eq!(matrix.measure(), DependenceMeasure::MutualInformation);
}

#[test]
fn zero_bins_fail_before_any_column() {
    // Even a table with nothing to bin reports the bad count
    let table = Table::new(vec![Column::from_labels("c", &["a", "b"])]).unwrap();
    assert_eq!(
        discretize(&table, 0, DiscretizationAlgorithm::EqualFrequency).unwrap_err(),
        StatsError::InvalidBinCount(0)
    );
}

#[test]
fn failing_column_aborts_the_table() {
    let table = Table::new(vec![
        Column::float("a", vec![1.0, 2.0, 3.0, 4.0]),
        Column::float("b", vec![1.0, 2.0, 3.0, 4.0]),
    ])
    .unwrap();
    // freq = 2, a single cut point at position 2
    assert!(matches!(
        discretize(&table, 2, DiscretizationAlgorithm::EqualFrequency),
        Err(StatsError::InsufficientBins { len: 4, num_bins: 2 })
    ));
}
