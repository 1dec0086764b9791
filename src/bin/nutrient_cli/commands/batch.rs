// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Batch calculation command
// ABOUTME: Loads a JSON profile array and reports each outcome in input order

use nutrient_calculator::{
    config::NutritionConfig,
    errors::{AppError, AppResult},
    formatters::{format_batch, OutputFormat},
    intelligence::{calculate_batch, load_profiles_from_path, summarize},
};
use std::path::Path;
use tracing::info;

/// Calculate and render every profile in `file`
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the file cannot be read or parsed
pub fn run(file: &Path, format: OutputFormat) -> AppResult<String> {
    let config = NutritionConfig::load().map_err(AppError::from)?;

    info!(file = %file.display(), "Loading profiles");
    let profiles = load_profiles_from_path(file)?;
    let items = summarize(calculate_batch(&profiles, &config));

    format_batch(&items, format)
}
