// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;
use rstest::rstest;
use tabstats::metrics::{VarianceKind, variance, variance_of};
use tabstats::table::Column;
use tabstats::{ErrorCategory, StatsError};

use crate::test_helpers::generate_gaussian_data;

#[rstest]
#[case(VarianceKind::Population, 2.0)]
#[case(VarianceKind::Sample, 2.5)]
fn one_to_five(#[case] kind: VarianceKind, #[case] expected: f64) {
    let column = Column::integer("x", vec![1_i64, 2, 3, 4, 5]);
    assert_abs_diff_eq!(variance(&column, kind).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn gaussian_variance_is_close_to_sigma_squared() {
    let data = generate_gaussian_data(5000, 1.0, 2.0, 3);
    let v = variance(&Column::float("g", data), VarianceKind::Sample).unwrap();
    assert!((v - 4.0).abs() < 0.3, "variance {v} too far from 4");
}

#[test]
fn single_value_has_zero_population_variance() {
    assert_eq!(
        variance_of(array![3.0].view(), VarianceKind::Population).unwrap(),
        0.0
    );
}

#[rstest]
#[case(VarianceKind::Population, 0, 1)]
#[case(VarianceKind::Sample, 1, 2)]
fn too_few_samples(#[case] kind: VarianceKind, #[case] n: usize, #[case] required: usize) {
    let values = vec![1.0; n];
    let err = variance(&Column::float("x", values), kind).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientSamples {
            operation: "variance",
            required,
            actual: n
        }
    );
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);
}

#[test]
fn variance_of_labels_is_a_type_error() {
    let column = Column::from_labels("c", &["a", "b"]);
    assert!(matches!(
        variance(&column, VarianceKind::Population),
        Err(StatsError::TypeMismatch { .. })
    ));
}

#[test]
fn variance_kind_parses_lowercase_names() {
    assert_eq!(
        "sample".parse::<VarianceKind>().unwrap(),
        VarianceKind::Sample
    );
    assert_eq!(
        "population".parse::<VarianceKind>().unwrap(),
        VarianceKind::Population
    );
    assert_eq!(
        "unbiased".parse::<VarianceKind>().unwrap_err(),
        StatsError::UnknownVarianceKind("unbiased".to_owned())
    );
}
