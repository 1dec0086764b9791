// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, canonical enumeration tags and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Canonical string tags accepted at the raw-string boundary
pub mod tags {
    /// Male sex tag
    pub const SEX_MALE: &str = "MALE";
    /// Female sex tag
    pub const SEX_FEMALE: &str = "FEMALE";
    /// All accepted sex tags
    pub const SEX_VALUES: &[&str] = &[SEX_MALE, SEX_FEMALE];

    /// Muscle gain goal tag
    pub const GOAL_MUSCLE_GAIN: &str = "MuscleGain";
    /// Fat loss goal tag
    pub const GOAL_FAT_LOSS: &str = "FatLoss";
    /// Maintenance goal tag
    pub const GOAL_MAINTAIN: &str = "Maintain";
    /// All accepted goal tags
    pub const GOAL_VALUES: &[&str] = &[GOAL_MUSCLE_GAIN, GOAL_FAT_LOSS, GOAL_MAINTAIN];
}

/// Input limits applied before estimation
pub mod limits {
    /// Body fat is a percentage of total weight
    pub const MAX_BODY_FAT_PCT: u32 = 100;
    /// Highest daily activity score accepted by default
    pub const DEFAULT_MAX_ACTIVITY_SCORE: u32 = 10;
}

/// Service names used in structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const NUTRIENT_CALCULATOR: &str = "nutrient-calculator";
}

/// Environment variable names
pub mod env_config {
    /// Prefix shared by every nutrition configuration override
    pub const NUTRITION_PREFIX: &str = "NUTRITION_";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment (development, production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
