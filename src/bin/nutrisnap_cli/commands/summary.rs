// ABOUTME: Daily summary command for nutrisnap-cli
// ABOUTME: Loads one day of the food log and prints totals, meal groups, and target progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use nutrisnap::{
    database::{Database, FoodLogStore},
    intelligence::{calculate_totals, daily_progress, group_by_meal},
    models::UserRef,
};

use crate::helpers::display::display_day;

/// Summarize the user's log for `date` (UTC today when omitted)
pub async fn today(database: &Database, user: &str, date: Option<NaiveDate>) -> Result<()> {
    let user = UserRef::new(user)?;
    let day = date.unwrap_or_else(|| Utc::now().date_naive());

    let foods = database.food_log().foods_for_day(&user, day).await?;
    let totals = calculate_totals(&foods);
    display_day(
        day,
        foods.len(),
        &group_by_meal(&foods),
        &daily_progress(&totals),
    );
    Ok(())
}
