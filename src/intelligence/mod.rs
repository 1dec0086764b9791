// ABOUTME: Intelligence module for nutrition estimation
// ABOUTME: Single-profile calculator and parallel batch estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Nutrition estimation from body composition, activity, age, stress and goal.

/// Lean mass, calorie and macronutrient calculation
pub mod nutrition_calculator;

/// Parallel evaluation of many profiles
pub mod batch;

pub use batch::{calculate_batch, load_profiles, load_profiles_from_path, summarize, BatchItem};
pub use nutrition_calculator::{
    calculate_nutrition, calculate_nutrition_from_strings, Goal, MacroGrams, MacroPercentages,
    NutrientCalculator, NutritionResult, PersonProfile, Sex,
};
