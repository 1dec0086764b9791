// ABOUTME: Main library entry point for the nutrient calculator
// ABOUTME: Estimates lean mass, daily calories and macronutrients from a person profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrient Calculator
//!
//! Daily nutrition targets from sex, weight, body fat, activity, age, stress and goal.
//!
//! ## Architecture
//!
//! - **Intelligence**: the estimation pipeline and parallel batch evaluation
//! - **Config**: coefficient tables with `NUTRITION_*` environment overrides
//! - **Formatters**: text, JSON and tuple rendering of results
//! - **Logging**: `tracing` subscriber setup writing to stderr
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrient_calculator::config::NutritionConfig;
//! use nutrient_calculator::errors::AppResult;
//! use nutrient_calculator::intelligence::{calculate_nutrition, Goal, PersonProfile, Sex};
//!
//! fn main() -> AppResult<()> {
//!     let profile = PersonProfile {
//!         sex: Sex::Male,
//!         total_weight: 100.0,
//!         body_fat_pct: 25,
//!         activity_score: 1,
//!         age: 23,
//!         stress_level: 5,
//!         goal: Goal::MuscleGain,
//!     };
//!     let result = calculate_nutrition(&profile, NutritionConfig::global())?;
//!     println!("{:?}", result.as_tuple());
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Output formatting for results
pub mod formatters;

/// Nutrition estimation
pub mod intelligence;

/// Logging setup
pub mod logging;

pub use nutrient_core::{constants, errors};
