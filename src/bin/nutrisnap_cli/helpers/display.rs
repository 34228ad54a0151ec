// ABOUTME: Output formatting helpers for nutrisnap-cli
// ABOUTME: Provides consistent display functions for recognition results, portions, and daily logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutrisnap::{
    models::{
        BmiResult, LoggedFood, MealGroup, NutrientProgress, NutritionRecord, ScaledNutrition,
        UserAccount, UserDetails,
    },
    services::RecognitionOutcome,
};
use serde_json::{json, Value};

const RULE_WIDTH: usize = 60;

/// Display a recognition outcome as a ranked table
pub fn display_outcome(outcome: &RecognitionOutcome) {
    println!("\nRecognition {} (capture #{})", outcome.status, outcome.generation);
    println!("{}", "=".repeat(RULE_WIDTH));

    if outcome.items.is_empty() && outcome.unresolved.is_empty() {
        println!("No food recognized.");
        return;
    }

    for record in &outcome.items {
        display_record_line(record);
    }

    if !outcome.unresolved.is_empty() {
        println!("\nUnresolved labels:");
        for failure in &outcome.unresolved {
            println!(
                "   {} ({:.0}%): {}",
                failure.label.description,
                failure.label.score * 100.0,
                failure.error
            );
        }
    }
}

fn display_record_line(record: &NutritionRecord) {
    println!(
        "   {:<24} {:>3.0}%  {:>7.1} kcal per {} {} ({:.0} g)",
        record.food_item,
        record.confidence * 100.0,
        record.nutrients.calories,
        record.serving_qty,
        record.serving_unit,
        record.serving_weight_grams
    );
}

/// JSON view of a recognition outcome
pub fn outcome_json(outcome: &RecognitionOutcome) -> Value {
    json!({
        "generation": outcome.generation,
        "status": outcome.status,
        "labels": outcome.labels,
        "items": outcome.items,
        "unresolved": outcome
            .unresolved
            .iter()
            .map(|failure| json!({
                "label": failure.label,
                "kind": failure.error.kind(),
                "error": failure.error.to_string(),
            }))
            .collect::<Vec<_>>(),
    })
}

/// Display nutrition scaled to an eaten weight
pub fn display_scaled(scaled: &ScaledNutrition) {
    let n = &scaled.nutrients;
    println!(
        "\n{} - {} g (x{:.2} of the reference serving)",
        scaled.food_item, scaled.weight_grams, scaled.multiplier
    );
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Calories:        {:>8.1} kcal", n.calories);
    println!("   Protein:         {:>8.1} g", n.protein);
    println!("   Carbohydrates:   {:>8.1} g", n.total_carbohydrate);
    println!("   Fat:             {:>8.1} g", n.total_fat);
    println!("   Saturated fat:   {:>8.1} g", n.saturated_fat);
    println!("   Fiber:           {:>8.1} g", n.dietary_fiber);
    println!("   Sugars:          {:>8.1} g", n.sugars);
    println!("   Cholesterol:     {:>8.1} mg", n.cholesterol);
    println!("   Sodium:          {:>8.1} mg", n.sodium);
    println!("   Potassium:       {:>8.1} mg", n.potassium);
    println!("   Phosphorus:      {:>8.1} mg", n.phosphorus);
}

/// Display a food that was just logged
pub fn display_logged_food(food: &LoggedFood) {
    println!(
        "\nLogged {} g of {} for {} ({:.0} kcal)",
        food.weight_grams, food.food_name, food.meal_type, food.calories
    );
    println!("   Entry: {}", food.id);
    println!(
        "   Logged at: {}",
        food.created_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Display one day of the food log
pub fn display_day(
    day: NaiveDate,
    food_count: usize,
    groups: &[MealGroup],
    progress: &[NutrientProgress],
) {
    println!("\nFood log for {} ({} items)", day.format("%Y-%m-%d"), food_count);
    println!("{}", "=".repeat(RULE_WIDTH));

    for metric in progress {
        println!(
            "   {:<10} {:>7.1} / {:>6.0} {:<4} {:>5.1}%",
            metric.title, metric.value, metric.target, metric.unit, metric.percent
        );
    }

    if groups.is_empty() {
        println!("\nNothing logged yet.");
        return;
    }

    for group in groups {
        println!("\n{} - {:.0} kcal", group.meal_type, group.calories);
        for item in &group.items {
            println!("   • {item}");
        }
    }
}

/// Display a BMI result
pub fn display_bmi(result: &BmiResult) {
    println!("\nBMI: {:.1} ({})", result.bmi, result.category);
}

/// Display a user and their body profile
pub fn display_profile(
    account: &UserAccount,
    details: Option<&UserDetails>,
    bmi: Option<&BmiResult>,
) {
    let name = if account.name.is_empty() {
        "(no name)"
    } else {
        account.name.as_str()
    };
    println!("\nProfile: {} ({name})", account.id);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "   Registered: {}",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    );

    let Some(details) = details else {
        println!("   No body profile saved.");
        return;
    };
    println!("   Age:        {}", details.age);
    println!("   Weight:     {:.1} kg", details.weight_kg);
    println!("   Height:     {:.1} cm", details.height_cm);
    println!("   Gender:     {}", details.gender);
    if let Some(bmi) = bmi {
        println!("   BMI:        {:.1} ({})", bmi.bmi, bmi.category);
    }
}
