// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Configuration display command
// ABOUTME: Prints the effective configuration and the environment overrides in use

use nutrient_calculator::{
    config::{environment_overrides, log_config_summary, NutritionConfig},
    errors::{AppError, AppResult},
    formatters::to_json,
};
use serde_json::json;

/// Render the effective configuration
///
/// # Errors
///
/// Returns an error if the environment overrides are invalid
pub fn show() -> AppResult<String> {
    let config = NutritionConfig::load().map_err(AppError::from)?;
    log_config_summary(&config);

    to_json(&json!({
        "environment_overrides": environment_overrides(),
        "nutrition": config,
    }))
}
