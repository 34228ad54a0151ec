// ABOUTME: User profile commands for nutrisnap-cli
// ABOUTME: Registers a user with a body profile and prints the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use nutrisnap::{
    database::Database,
    intelligence::calculate_bmi,
    models::{Gender, UserDetails, UserRef},
};
use tracing::info;

use crate::helpers::display::display_profile;

/// Body measurements passed on the command line
pub struct ProfileInput<'a> {
    /// Display name
    pub name: &'a str,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// male, female, or other
    pub gender: &'a str,
}

/// Register the user (or rename them) and replace their body profile
pub async fn set(database: &Database, user: &str, input: &ProfileInput<'_>) -> Result<()> {
    let user = UserRef::new(user)?;
    let details = UserDetails::new(
        input.age,
        input.weight_kg,
        input.height_cm,
        input.gender.parse::<Gender>()?,
    )?;

    let users = database.users();
    let account = users.create_user(&user, input.name).await?;
    users.save_user_details(&user, &details).await?;
    info!(user = %user, "Profile saved");

    let bmi = calculate_bmi(details.weight_kg, details.height_cm).ok();
    display_profile(&account, Some(&details), bmi.as_ref());
    Ok(())
}

/// Print the stored profile of a registered user
pub async fn show(database: &Database, user: &str) -> Result<()> {
    let user = UserRef::new(user)?;
    let users = database.users();

    let Some(account) = users.get_user(&user).await? else {
        bail!("User {user} is not registered; save a profile with `nutrisnap-cli profile set`");
    };
    let details = users.user_details(&user).await?;
    let bmi = details
        .as_ref()
        .and_then(|d| calculate_bmi(d.weight_kg, d.height_cm).ok());

    display_profile(&account, details.as_ref(), bmi.as_ref());
    Ok(())
}
