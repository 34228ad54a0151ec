// ABOUTME: Integration tests for the daily food log summary
// ABOUTME: Covers macro totals, meal grouping order, and progress against daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{create_test_database, entry, logged, test_user};
use nutrisnap::database::FoodLogStore;
use nutrisnap::intelligence::{calculate_totals, daily_progress, group_by_meal};
use nutrisnap::models::{MealType, NutrientTotals};

#[test]
fn test_totals_sum_every_food() {
    let foods = [
        logged("eggs", MealType::Breakfast, 155.0),
        logged("soup", MealType::Lunch, 230.0),
    ];

    let totals = calculate_totals(&foods);

    assert!((totals.calories - 385.0).abs() < 1e-9);
    assert!((totals.protein - 20.0).abs() < 1e-9);
    assert!((totals.carbs - 40.0).abs() < 1e-9);
    assert!((totals.fats - 10.0).abs() < 1e-9);
}

#[test]
fn test_groups_follow_meal_order_and_skip_empty_meals() {
    let foods = [
        logged("chips", MealType::Snack, 150.0),
        logged("steak", MealType::Dinner, 700.0),
        logged("coffee", MealType::Breakfast, 5.0),
        logged("potatoes", MealType::Dinner, 200.0),
        logged("mystery", MealType::Other, 50.0),
    ];

    let groups = group_by_meal(&foods);
    let order: Vec<MealType> = groups.iter().map(|g| g.meal_type).collect();

    assert_eq!(
        order,
        [
            MealType::Breakfast,
            MealType::Dinner,
            MealType::Snack,
            MealType::Other
        ]
    );
    assert_eq!(groups[1].items, ["steak", "potatoes"]);
    assert!((groups[1].calories - 900.0).abs() < 1e-9);
}

#[test]
fn test_progress_against_targets() {
    let progress = daily_progress(&NutrientTotals {
        calories: 1000.0,
        protein: 40.0,
        carbs: 300.0,
        fats: 0.0,
    });

    let titles: Vec<&str> = progress.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Calories", "Protein", "Carbs", "Fats"]);
    assert!((progress[0].percent - 50.0).abs() < 1e-9);
    assert!((progress[1].percent - 50.0).abs() < 1e-9);
    assert!((progress[2].percent - 120.0).abs() < 1e-9);
    assert!(progress[3].percent.abs() < 1e-9);
    assert_eq!(progress[0].unit, "kcal");
    assert_eq!(progress[3].unit, "g");
}

#[tokio::test]
async fn test_summary_of_stored_day() {
    let db = create_test_database().await.unwrap();
    let log = db.food_log();
    let user = test_user("alice");

    let morning = Utc.with_ymd_and_hms(2025, 6, 2, 7, 30, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2025, 6, 2, 12, 45, 0).unwrap();
    log.add_food_at(&entry(&user, "yogurt", MealType::Breakfast, 120.0), morning)
        .await
        .unwrap();
    log.add_food_at(&entry(&user, "wrap", MealType::Lunch, 480.0), noon)
        .await
        .unwrap();

    let foods = log.foods_for_day(&user, morning.date_naive()).await.unwrap();
    let totals = calculate_totals(&foods);

    assert!((totals.calories - 600.0).abs() < 1e-9);
    assert_eq!(group_by_meal(&foods).len(), 2);
}
