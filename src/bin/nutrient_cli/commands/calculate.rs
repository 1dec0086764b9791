// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-profile calculation command
// ABOUTME: Builds a profile from CLI arguments and renders the result

use nutrient_calculator::{
    config::NutritionConfig,
    errors::{AppError, AppResult},
    formatters::{format_result, OutputFormat},
    intelligence::{calculate_nutrition, Goal, PersonProfile, Sex},
};
use tracing::info;

/// Profile fields as given on the command line
pub struct ProfileArgs {
    pub sex: Sex,
    pub weight: f64,
    pub body_fat: u32,
    pub activity: u32,
    pub age: u32,
    pub stress: u32,
    pub goal: Goal,
}

impl From<ProfileArgs> for PersonProfile {
    fn from(args: ProfileArgs) -> Self {
        Self {
            sex: args.sex,
            total_weight: args.weight,
            body_fat_pct: args.body_fat,
            activity_score: args.activity,
            age: args.age,
            stress_level: args.stress,
            goal: args.goal,
        }
    }
}

/// Calculate and render one profile
///
/// # Errors
///
/// Returns an error if the configuration or the profile is invalid
pub fn run(args: ProfileArgs, format: OutputFormat) -> AppResult<String> {
    let config = NutritionConfig::load().map_err(AppError::from)?;
    let profile = PersonProfile::from(args);

    info!(sex = %profile.sex, goal = %profile.goal, "Calculating nutrition");
    let result = calculate_nutrition(&profile, &config)?;
    format_result(&result, format)
}
