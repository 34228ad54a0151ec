// ABOUTME: Unit conversion constants and body mass index thresholds
// ABOUTME: Input bounds for height and weight used by the BMI calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Maximum accepted height in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Maximum accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// BMI category upper bounds (exclusive)
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value the category is normal weight
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value the category is overweight; at or above it, obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Maximum accepted age in years for a stored body profile
pub const MAX_AGE_YEARS: u32 = 150;
