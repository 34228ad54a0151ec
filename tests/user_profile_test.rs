// ABOUTME: Integration tests for user registration and stored body profiles
// ABOUTME: Covers profile upserts, implicit registration by food logging, persistence, and BMI fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{create_test_database, entry, init_test_logging, test_user};
use nutrisnap::config::DatabaseUrl;
use nutrisnap::database::{Database, FoodLogStore};
use nutrisnap::errors::ErrorCode;
use nutrisnap::intelligence::{body_measurements, calculate_bmi};
use nutrisnap::models::{BmiCategory, Gender, MealType, UserDetails};
use tempfile::TempDir;

#[tokio::test]
async fn test_profile_is_saved_and_replaced() {
    let db = create_test_database().await.unwrap();
    let users = db.users();
    let user = test_user("5551234567");

    let account = users.create_user(&user, "Priya").await.unwrap();
    assert_eq!(account.id, user);
    assert_eq!(account.name, "Priya");
    assert!(users.user_details(&user).await.unwrap().is_none());

    let first = UserDetails::new(29, 61.0, 168.0, Gender::Female).unwrap();
    users.save_user_details(&user, &first).await.unwrap();
    assert_eq!(users.user_details(&user).await.unwrap(), Some(first));

    let updated = UserDetails::new(30, 59.5, 168.0, Gender::Female).unwrap();
    users.save_user_details(&user, &updated).await.unwrap();
    assert_eq!(users.user_details(&user).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let db = create_test_database().await.unwrap();

    let error = db
        .users()
        .create_user(&test_user("alice"), "   ")
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(db.users().get_user(&test_user("alice")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_logging_food_registers_the_user() {
    let db = create_test_database().await.unwrap();
    let user = test_user("bob");
    let at = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();

    db.food_log()
        .add_food_at(&entry(&user, "ramen", MealType::Lunch, 450.0), at)
        .await
        .unwrap();

    let account = db.users().get_user(&user).await.unwrap().unwrap();
    assert_eq!(account.name, "");
    assert_eq!(account.created_at, at);

    let named = db.users().create_user(&user, "Bob").await.unwrap();
    assert_eq!(named.name, "Bob");
    assert_eq!(named.created_at, at);

    let foods = db
        .food_log()
        .foods_for_day(&user, at.date_naive())
        .await
        .unwrap();
    assert_eq!(foods.len(), 1);
}

#[tokio::test]
async fn test_meals_reference_registered_users() {
    let db = create_test_database().await.unwrap();

    let result = sqlx::query(
        "INSERT INTO meals (id, user_id, name, created_at) VALUES ('m1', 'ghost', 'Lunch', '2025-03-09T12:00:00.000000Z')",
    )
    .execute(db.pool())
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_profile_survives_reconnect() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("profiles.db"),
    };
    let user = test_user("carol");
    let details = UserDetails::new(52, 95.0, 175.0, Gender::Other).unwrap();

    {
        let db = Database::connect(&url).await.unwrap();
        db.users().create_user(&user, "Carol").await.unwrap();
        db.users().save_user_details(&user, &details).await.unwrap();
        db.pool().close().await;
    }

    let reopened = Database::connect(&url).await.unwrap();
    assert_eq!(
        reopened.users().user_details(&user).await.unwrap(),
        Some(details)
    );
}

#[tokio::test]
async fn test_bmi_uses_stored_measurements_when_none_are_given() {
    let db = create_test_database().await.unwrap();
    let user = test_user("dave");
    db.users().create_user(&user, "Dave").await.unwrap();
    db.users()
        .save_user_details(
            &user,
            &UserDetails::new(41, 70.0, 175.0, Gender::Male).unwrap(),
        )
        .await
        .unwrap();

    let profile = db.users().user_details(&user).await.unwrap();
    let (weight_kg, height_cm) = body_measurements(None, None, profile.as_ref()).unwrap();
    let result = calculate_bmi(weight_kg, height_cm).unwrap();

    assert!((result.bmi - 22.9).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::NormalWeight);

    let missing = body_measurements(None, Some(175.0), None).unwrap_err();
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
}
