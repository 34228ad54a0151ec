// ABOUTME: Registered user and body profile models
// ABOUTME: UserAccount, UserDetails with validated measurements, and Gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UserRef;
use crate::constants::units::{MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::errors::{AppError, AppResult};

/// Gender recorded in a body profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Storage and display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected male, female, or other"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Principal the account belongs to
    pub id: UserRef,
    /// Display name, empty until the user registers one
    pub name: String,
    /// When the account was first stored
    pub created_at: DateTime<Utc>,
}

/// Body profile of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Gender
    pub gender: Gender,
}

impl UserDetails {
    /// Build a profile after checking every measurement
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero age or a non-positive or non-finite
    /// weight or height, and `ValueOutOfRange` above 150 years, 500 kg, or 300 cm
    pub fn new(age: u32, weight_kg: f64, height_cm: f64, gender: Gender) -> AppResult<Self> {
        if age == 0 {
            return Err(AppError::invalid_input("Age must be a positive number"));
        }
        if age > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Age must be at most {MAX_AGE_YEARS} years"
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be a positive number"));
        }
        if weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be at most {MAX_WEIGHT_KG} kg"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be a positive number"));
        }
        if height_cm > MAX_HEIGHT_CM {
            return Err(AppError::value_out_of_range(format!(
                "Height must be at most {MAX_HEIGHT_CM} cm"
            )));
        }

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            gender,
        })
    }
}
