// ABOUTME: Body metric commands for nutrisnap-cli
// ABOUTME: Computes the body mass index from explicit or stored measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutrisnap::{
    intelligence::{body_measurements, calculate_bmi},
    models::UserDetails,
};

use crate::helpers::display::display_bmi;

/// Print the BMI, filling missing measurements from `profile`
pub fn bmi(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    profile: Option<&UserDetails>,
) -> Result<()> {
    let (weight_kg, height_cm) = body_measurements(weight_kg, height_cm, profile)?;
    let result = calculate_bmi(weight_kg, height_cm)?;
    display_bmi(&result);
    Ok(())
}
