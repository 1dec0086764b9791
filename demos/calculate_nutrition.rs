// ABOUTME: Demonstrates the typed and raw-string nutrition entry points
// ABOUTME: Run with `cargo run --example calculate_nutrition`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition calculation demo
//!
//! Computes the same profile twice, once with typed enums and once with the
//! raw string tags, and prints both five-value tuples.

use nutrient_calculator::{
    config::NutritionConfig,
    errors::AppResult,
    intelligence::{calculate_nutrition, calculate_nutrition_from_strings, Goal, PersonProfile, Sex},
    logging,
};

fn main() -> AppResult<()> {
    if let Err(e) = logging::init_from_env() {
        eprintln!("logging unavailable: {e}");
    }

    let profile = PersonProfile {
        sex: Sex::Male,
        total_weight: 100.0,
        body_fat_pct: 25,
        activity_score: 1,
        age: 23,
        stress_level: 5,
        goal: Goal::MuscleGain,
    };
    let typed = calculate_nutrition(&profile, NutritionConfig::global())?;
    println!("typed:  {:?}", typed.as_tuple());

    let raw = calculate_nutrition_from_strings("MALE", 100.0, 25, 1, 23, 5, "MuscleGain")?;
    println!("string: {:?}", raw.as_tuple());

    if let Some(split) = raw.macro_percentages() {
        println!(
            "split:  protein {:.1}%, fat {:.1}%, carbs {:.1}%",
            split.protein_percent, split.fat_percent, split.carbs_percent
        );
    }

    match calculate_nutrition_from_strings("male", 100.0, 25, 1, 23, 5, "MuscleGain") {
        Ok(_) => println!("lowercase tag unexpectedly accepted"),
        Err(e) => println!("lowercase tag rejected: {e}"),
    }

    Ok(())
}
