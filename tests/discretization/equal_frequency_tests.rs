// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tabstats::discretization::{discretize_equal_frequency, equal_frequency_cut_points};
use tabstats::table::{Column, ColumnData};
use tabstats::{DiscretizationAlgorithm, ErrorCategory, StatsError};

use crate::test_helpers::generate_gaussian_data;

fn bin_sizes(column: &Column) -> Vec<usize> {
    let ColumnData::Categorical(binned) = column.data() else {
        panic!("expected a categorical column");
    };
    let mut sizes = vec![0; binned.levels().len()];
    for &code in binned.codes() {
        sizes[code as usize] += 1;
    }
    sizes
}

#[test]
fn twelve_values_into_four_bins() {
    let values: Vec<f64> = (1..=12).map(f64::from).collect();
    let column = Column::float("x", values);
    let result = discretize_equal_frequency(&column, 4).unwrap();
    assert_eq!(result.cut_points, vec![4.0, 7.0, 10.0]);
    assert_eq!(bin_sizes(&result.column), vec![4, 3, 3, 2]);
}

#[test]
fn bins_are_roughly_balanced_on_gaussian_data() {
    let column = Column::float("g", generate_gaussian_data(200, 0.0, 1.0, 11));
    let result = discretize_equal_frequency(&column, 5).unwrap();
    let sizes = bin_sizes(&result.column);
    assert_eq!(sizes.len(), 5);
    assert_eq!(sizes.iter().sum::<usize>(), 200);
    for size in sizes {
        assert!((39..=41).contains(&size), "unbalanced bin of size {size}");
    }
}

#[test]
fn unsorted_input_gives_same_cut_points() {
    let sorted: Array1<f64> = (0..9).map(f64::from).collect();
    let shuffled = Array1::from(vec![4.0, 8.0, 0.0, 6.0, 2.0, 7.0, 1.0, 5.0, 3.0]);
    assert_eq!(
        equal_frequency_cut_points(sorted.view(), 3).unwrap(),
        equal_frequency_cut_points(shuffled.view(), 3).unwrap()
    );
}

#[test]
fn single_cut_point_is_rejected() {
    // freq = 6, one cut at position 6
    let values: Array1<f64> = (0..12).map(f64::from).collect();
    let err = equal_frequency_cut_points(values.view(), 2).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientBins {
            len: 12,
            num_bins: 2
        }
    );
    assert_eq!(err.category(), ErrorCategory::Degenerate);
}

#[test]
fn more_bins_than_values_is_rejected() {
    let values = Array1::from(vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        equal_frequency_cut_points(values.view(), 8),
        Err(StatsError::InsufficientBins { .. })
    ));
}

#[test]
fn single_bin_has_no_cut_points() {
    let values = Array1::from(vec![3.0, 1.0, 2.0]);
    assert!(equal_frequency_cut_points(values.view(), 1).unwrap().is_empty());
}

#[test]
fn algorithm_parses_short_names() {
    assert_eq!(
        "EW".parse::<DiscretizationAlgorithm>().unwrap(),
        DiscretizationAlgorithm::EqualWidth
    );
    assert_eq!(
        "EF".parse::<DiscretizationAlgorithm>().unwrap(),
        DiscretizationAlgorithm::EqualFrequency
    );
    assert_eq!(DiscretizationAlgorithm::EqualFrequency.to_string(), "EF");
    let err = "quantile".parse::<DiscretizationAlgorithm>().unwrap_err();
    assert_eq!(err, StatsError::UnknownAlgorithm("quantile".to_owned()));
    assert_eq!(err.category(), ErrorCategory::Configuration);
}
