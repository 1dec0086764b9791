// ABOUTME: Intelligence configuration loading for the nutrient calculator
// ABOUTME: Applies environment overrides, validates, and exposes a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is environment-only: defaults are compiled in and selected
//! coefficients can be overridden with `NUTRITION_*` variables.
//!
//! - `nutrition` - lean mass brackets, calorie multipliers, macro ratios
//! - `error` - validation and parse errors

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    AgeBracket, BodyFatBracket, CalorieConfig, GoalFactorsConfig, GoalMacroRatios,
    InputLimitsConfig, LeanMassConfig, MacroRatio, MacronutrientConfig, NutritionConfig,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Loads defaults plus environment overrides on first use. An invalid
    /// environment falls back to the defaults with a warning.
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            base_kcal_per_kg = config.calories.base_kcal_per_kg,
            max_activity_score = config.limits.max_activity_score,
            "Nutrition configuration loaded"
        );
        Ok(config)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
            }
            Err(env::VarError::NotUnicode(val)) => {
                return Err(ConfigError::Parse(format!(
                    "Invalid {env_var_name}: {val:?} is not valid UTF-8"
                )));
            }
            Err(env::VarError::NotPresent) => {}
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRITION_BASE_KCAL_PER_KG",
            &mut self.calories.base_kcal_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_HIGH_STRESS_FACTOR",
            &mut self.calories.high_stress_factor,
        )?;
        Self::apply_env_var(
            "NUTRITION_SENIOR_FACTOR",
            &mut self.calories.senior_factor,
        )?;

        // Goal multipliers
        Self::apply_env_var(
            "NUTRITION_GOAL_FAT_LOSS_FACTOR",
            &mut self.calories.goal_factors.fat_loss,
        )?;
        Self::apply_env_var(
            "NUTRITION_GOAL_MAINTAIN_FACTOR",
            &mut self.calories.goal_factors.maintain,
        )?;
        Self::apply_env_var(
            "NUTRITION_GOAL_MUSCLE_GAIN_FACTOR",
            &mut self.calories.goal_factors.muscle_gain,
        )?;

        // Lean mass
        Self::apply_env_var(
            "NUTRITION_FALLBACK_LEAN_FACTOR",
            &mut self.lean_mass.fallback_lean_factor,
        )?;

        // Input limits
        Self::apply_env_var(
            "NUTRITION_MAX_ACTIVITY_SCORE",
            &mut self.limits.max_activity_score,
        )?;
        Self::apply_env_var(
            "NUTRITION_MAX_BODY_FAT_PCT",
            &mut self.limits.max_body_fat_pct,
        )?;

        Ok(self)
    }
}
