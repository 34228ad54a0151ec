// ABOUTME: Integration tests for body mass index calculation
// ABOUTME: Covers the reference case, category boundaries, rounding, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisnap::errors::ErrorCode;
use nutrisnap::intelligence::calculate_bmi;
use nutrisnap::models::BmiCategory;

#[test]
fn test_reference_adult() {
    let result = calculate_bmi(70.0, 175.0).unwrap();

    assert!((result.bmi - 22.9).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::NormalWeight);
    assert_eq!(result.category.to_string(), "Normal Weight");
}

#[test]
fn test_categories_across_weights() {
    let cases = [
        (50.0, BmiCategory::Underweight),
        (80.0, BmiCategory::Overweight),
        (100.0, BmiCategory::Obese),
    ];
    for (weight, expected) in cases {
        assert_eq!(calculate_bmi(weight, 175.0).unwrap().category, expected);
    }
}

#[test]
fn test_category_uses_unrounded_value() {
    // 76.44 kg at 175 cm is 24.96, shown as 25.0 but still normal
    let result = calculate_bmi(76.44, 175.0).unwrap();

    assert!((result.bmi - 25.0).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::NormalWeight);
}

#[test]
fn test_rejects_non_positive_and_non_finite_input() {
    for (weight, height) in [
        (0.0, 175.0),
        (-70.0, 175.0),
        (70.0, 0.0),
        (f64::NAN, 175.0),
        (70.0, f64::INFINITY),
    ] {
        let error = calculate_bmi(weight, height).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_rejects_implausible_measurements() {
    assert_eq!(
        calculate_bmi(70.0, 301.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        calculate_bmi(501.0, 175.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert!(calculate_bmi(500.0, 300.0).is_ok());
}
