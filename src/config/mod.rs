// ABOUTME: Configuration management module for nutrition estimation parameters
// ABOUTME: Exposes the intelligence configuration and a startup summary helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the nutrient calculator
//!
//! - **Intelligence**: coefficient tables for lean mass, calories and macros,
//!   loaded from compiled-in defaults plus `NUTRITION_*` environment overrides

use crate::constants::env_config::NUTRITION_PREFIX;
use std::env;
use std::ffi::OsString;
use tracing::info;

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{ConfigError, NutritionConfig};

/// Log a one-line summary of the effective configuration
pub fn log_config_summary(config: &NutritionConfig) {
    info!(
        base_kcal_per_kg = config.calories.base_kcal_per_kg,
        male_brackets = config.lean_mass.male.len(),
        female_brackets = config.lean_mass.female.len(),
        max_body_fat_pct = config.limits.max_body_fat_pct,
        max_activity_score = config.limits.max_activity_score,
        "Nutrition configuration in effect"
    );
}

/// Names of the `NUTRITION_*` variables set in the process environment, sorted
#[must_use]
pub fn environment_overrides() -> Vec<String> {
    override_names(env::vars_os())
}

/// Keys that are valid UTF-8 and carry the nutrition prefix; other keys are skipped
fn override_names(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Vec<String> {
    let mut names: Vec<String> = vars
        .into_iter()
        .filter_map(|(name, _)| name.into_string().ok())
        .filter(|name| name.starts_with(NUTRITION_PREFIX))
        .collect();
    names.sort();
    names
}
