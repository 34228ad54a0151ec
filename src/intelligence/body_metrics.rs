// ABOUTME: Body mass index calculation with input validation and WHO categories
// ABOUTME: BMI = weight (kg) / height (m)^2, with stored profile measurements as fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::portion_scaling::round_to_tenth;
use crate::constants::units::{bmi, CM_PER_METER, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::errors::{AppError, AppResult};
use crate::models::{BmiCategory, BmiResult, UserDetails};

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// The category is taken from the unrounded value, so 24.96 reports as
/// 25.0 but stays "Normal Weight".
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive or non-finite values and
/// `ValueOutOfRange` for heights above 300 cm or weights above 500 kg
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<BmiResult> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(AppError::value_out_of_range(format!(
            "Height must be at most {MAX_HEIGHT_CM} cm"
        )));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "Weight must be at most {MAX_WEIGHT_KG} kg"
        )));
    }

    let height_m = height_cm / CM_PER_METER;
    let value = weight_kg / (height_m * height_m);

    Ok(BmiResult {
        bmi: round_to_tenth(value),
        category: classify_bmi(value),
    })
}

/// Pick the weight and height for a BMI calculation
///
/// Explicit values win; each missing one falls back to the stored profile.
///
/// # Errors
///
/// Returns `MissingRequiredField` when a measurement is neither given nor stored
pub fn body_measurements(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    profile: Option<&UserDetails>,
) -> AppResult<(f64, f64)> {
    let weight_kg = weight_kg
        .or_else(|| profile.map(|p| p.weight_kg))
        .ok_or_else(|| AppError::missing_field("weight_kg"))?;
    let height_cm = height_cm
        .or_else(|| profile.map(|p| p.height_cm))
        .ok_or_else(|| AppError::missing_field("height_cm"))?;
    Ok((weight_kg, height_cm))
}

/// Classify a BMI value
#[must_use]
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < bmi::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if value < bmi::NORMAL_BELOW {
        BmiCategory::NormalWeight
    } else if value < bmi::OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
