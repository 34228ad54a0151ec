// ABOUTME: Criterion benchmarks for label ranking, portion scaling, and a mocked recognition cycle
// ABOUTME: Measures pure algorithm throughput and pipeline overhead without network calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recognition pipeline.
//!
//! Label ranking is measured across annotation sizes, scaling across a spread
//! of requested weights, and one full recognition cycle against in-memory
//! collaborators.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrisnap::config::PipelineConfig;
use nutrisnap::external::{MockNutritionLookup, MockVisionProvider, NutritionixFood};
use nutrisnap::intelligence::{rank_food_labels, scale_nutrition};
use nutrisnap::models::{DetectedLabel, NutrientProfile, NutritionRecord};
use nutrisnap::services::FoodRecognitionPipeline;
use std::sync::Arc;
use tokio::runtime::Runtime;

const FOODS: [&str; 8] = [
    "Pizza", "Sushi", "Salad", "Burger", "Ramen", "Pancake", "Burrito", "Omelette",
];
const GENERIC: [&str; 4] = ["Food", "Dish", "Cuisine", "Ingredient"];

/// Candidate list mixing specific foods with generic labels
fn generate_candidates(count: usize) -> Vec<DetectedLabel> {
    (0..count)
        .map(|i| {
            let description = if i % 3 == 0 {
                GENERIC[i % GENERIC.len()]
            } else {
                FOODS[i % FOODS.len()]
            };
            let score = ((i * 37) % 100) as f64 / 100.0;
            DetectedLabel::new(description, score)
        })
        .collect()
}

fn sample_record() -> NutritionRecord {
    NutritionRecord {
        food_item: "pizza".to_owned(),
        nutrients: NutrientProfile {
            calories: 285.0,
            total_fat: 10.4,
            saturated_fat: 4.8,
            cholesterol: 18.0,
            sodium: 640.0,
            total_carbohydrate: 35.7,
            dietary_fiber: 2.5,
            sugars: 3.8,
            protein: 12.2,
            potassium: 184.0,
            phosphorus: 216.0,
        },
        serving_qty: 1.0,
        serving_unit: "slice".to_owned(),
        serving_weight_grams: 107.0,
        confidence: 0.97,
    }
}

fn bench_rank_food_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_food_labels");

    for size in [5_usize, 20, 100] {
        let candidates = generate_candidates(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, input| {
            b.iter(|| rank_food_labels(black_box(input.clone()), 3));
        });
    }

    group.finish();
}

fn bench_scale_nutrition(c: &mut Criterion) {
    let record = sample_record();
    let mut group = c.benchmark_group("scale_nutrition");

    for grams in [50.0_f64, 107.0, 250.0, 1_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(grams), &grams, |b, &grams| {
            b.iter(|| scale_nutrition(black_box(&record), black_box(grams)));
        });
    }

    group.finish();
}

fn bench_recognition_cycle(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let lookup = FOODS.iter().fold(MockNutritionLookup::new(), |mock, food| {
        mock.with_food(
            format!("1 serving {food}"),
            NutritionixFood::named(food.to_lowercase(), 250.0, 120.0),
        )
    });
    let pipeline = FoodRecognitionPipeline::new(
        Arc::new(MockVisionProvider::with_labels(&[
            ("Food", 0.99),
            ("Pizza", 0.95),
            ("Salad", 0.81),
            ("Dish", 0.8),
            ("Burger", 0.64),
        ])),
        Arc::new(lookup),
        PipelineConfig::default(),
    );

    c.bench_function("recognition_cycle_mocked", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(pipeline.recognize(b"image").await) });
    });
}

criterion_group!(
    benches,
    bench_rank_food_labels,
    bench_scale_nutrition,
    bench_recognition_cycle
);
criterion_main!(benches);
