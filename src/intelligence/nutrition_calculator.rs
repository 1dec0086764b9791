// ABOUTME: Nutrition calculation from body composition, activity, age, stress and goal
// ABOUTME: Lean mass, daily calories and protein/fat/carb split with a raw-string adapter
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition Calculator Module
//!
//! Estimates daily nutrition targets from seven inputs: sex, total weight,
//! body-fat percentage, daily activity score, age, stress level and goal.
//!
//! # Pipeline
//!
//! 1. **Clean weight**: total weight scaled by a body-fat bracket factor
//! 2. **Calories**: `clean_weight x (base + activity)`, then age, stress and goal multipliers
//! 3. **Macros**: protein and fat per unit of clean weight, carbs take the remaining calories
//!
//! Mass outputs share the unit of the input weight. All coefficients come from
//! [`NutritionConfig`].

use crate::config::intelligence::NutritionConfig;
use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::constants::tags::{
    GOAL_FAT_LOSS, GOAL_MAINTAIN, GOAL_MUSCLE_GAIN, GOAL_VALUES, SEX_FEMALE, SEX_MALE, SEX_VALUES,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Biological sex, selects the lean mass and macro branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    #[serde(rename = "MALE")]
    Male,
    /// Female
    #[serde(rename = "FEMALE")]
    Female,
}

impl Sex {
    /// Canonical string tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => SEX_MALE,
            Self::Female => SEX_FEMALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SEX_MALE => Ok(Self::Male),
            SEX_FEMALE => Ok(Self::Female),
            other => Err(AppError::invalid_enum_value("sex", other, SEX_VALUES)),
        }
    }
}

/// Fitness objective, drives the calorie multiplier and macro ratios
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Caloric surplus
    MuscleGain,
    /// Caloric deficit
    FatLoss,
    /// Caloric balance
    Maintain,
}

impl Goal {
    /// Canonical string tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => GOAL_MUSCLE_GAIN,
            Self::FatLoss => GOAL_FAT_LOSS,
            Self::Maintain => GOAL_MAINTAIN,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GOAL_MUSCLE_GAIN => Ok(Self::MuscleGain),
            GOAL_FAT_LOSS => Ok(Self::FatLoss),
            GOAL_MAINTAIN => Ok(Self::Maintain),
            other => Err(AppError::invalid_enum_value("goal", other, GOAL_VALUES)),
        }
    }
}

/// Person and goal description fed to the calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PersonProfile {
    /// Biological sex
    pub sex: Sex,
    /// Total body weight; outputs use the same unit
    pub total_weight: f64,
    /// Body fat as a percentage of total weight
    pub body_fat_pct: u32,
    /// Daily activity score, added to the base kcal per unit of lean mass
    pub activity_score: u32,
    /// Age in years
    pub age: u32,
    /// Stress level (1-4 scale, anything else counts as highest)
    pub stress_level: u32,
    /// Fitness goal
    pub goal: Goal,
}

/// Daily nutrition recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionResult {
    /// Lean body mass estimate
    pub clean_weight: f64,
    /// Daily energy target (kcal)
    pub calories: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
    /// Daily carbohydrates (grams); negative when protein and fat already exceed the calorie target
    pub carbs_g: f64,
}

/// Share of macro calories per macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of macro calories
    pub protein_percent: f64,
    /// Fat as percentage of macro calories
    pub fat_percent: f64,
    /// Carbohydrates as percentage of macro calories
    pub carbs_percent: f64,
}

impl NutritionResult {
    /// `(clean_weight, calories, protein, fat, carbs)`
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.clean_weight,
            self.calories,
            self.protein_g,
            self.fat_g,
            self.carbs_g,
        )
    }

    /// Macro calorie shares, `None` when the macros carry no positive energy
    #[must_use]
    pub fn macro_percentages(&self) -> Option<MacroPercentages> {
        let protein_kcal = self.protein_g * KCAL_PER_G_PROTEIN;
        let fat_kcal = self.fat_g * KCAL_PER_G_FAT;
        let carbs_kcal = self.carbs_g * KCAL_PER_G_CARBS;
        let total_kcal = protein_kcal + fat_kcal + carbs_kcal;

        if total_kcal <= 0.0 || !total_kcal.is_finite() {
            return None;
        }

        Some(MacroPercentages {
            protein_percent: protein_kcal / total_kcal * 100.0,
            fat_percent: fat_kcal / total_kcal * 100.0,
            carbs_percent: carbs_kcal / total_kcal * 100.0,
        })
    }
}

/// Macronutrient grams for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
}

/// Validated calculator bound to a profile and a configuration
#[derive(Debug, Clone, Copy)]
pub struct NutrientCalculator<'a> {
    profile: PersonProfile,
    config: &'a NutritionConfig,
}

impl<'a> NutrientCalculator<'a> {
    /// Create a calculator after validating the profile against the configured limits
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a positive finite number, the
    /// body-fat percentage or activity score exceed their limits, or the age is zero
    pub fn new(profile: PersonProfile, config: &'a NutritionConfig) -> AppResult<Self> {
        validate_profile(&profile, config)?;
        Ok(Self { profile, config })
    }

    /// Lean (clean) weight from the body-fat bracket table
    #[must_use]
    pub fn calculate_clean_weight(&self) -> f64 {
        let factor = self
            .config
            .lean_mass
            .lean_factor(self.profile.sex, self.profile.body_fat_pct);
        self.profile.total_weight * factor
    }

    /// Daily calories for a given clean weight
    #[must_use]
    pub fn calculate_calories(&self, clean_weight: f64) -> f64 {
        let cal = &self.config.calories;
        let base = clean_weight * (cal.base_kcal_per_kg + f64::from(self.profile.activity_score));

        base * cal.age_factor(self.profile.age)
            * cal.stress_factor(self.profile.stress_level)
            * cal.goal_factor(self.profile.goal)
    }

    /// Protein and fat from clean weight; carbs fill the remaining calories
    #[must_use]
    pub fn calculate_macros(&self, clean_weight: f64, calories: f64) -> MacroGrams {
        let ratio = self
            .config
            .macronutrients
            .ratio_for(self.profile.sex, self.profile.goal);

        let protein_g = clean_weight * ratio.protein_per_kg;
        let fat_g = clean_weight * ratio.fat_per_kg;
        let carbs_g = protein_g
            .mul_add(-KCAL_PER_G_PROTEIN, fat_g.mul_add(-KCAL_PER_G_FAT, calories))
            / KCAL_PER_G_CARBS;

        MacroGrams {
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    /// Run the full pipeline
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the weight is so large that calories or
    /// carbohydrates overflow to a non-finite value
    pub fn calculate_nutrition(&self) -> AppResult<NutritionResult> {
        let clean_weight = self.calculate_clean_weight();
        let calories = self.calculate_calories(clean_weight);
        let macros = self.calculate_macros(clean_weight, calories);

        if !calories.is_finite() || !macros.carbs_g.is_finite() {
            return Err(AppError::value_out_of_range(
                "total_weight",
                self.profile.total_weight,
                "a weight whose daily calories are finite",
            ));
        }

        debug!(
            sex = %self.profile.sex,
            goal = %self.profile.goal,
            clean_weight,
            calories,
            protein_g = macros.protein_g,
            fat_g = macros.fat_g,
            carbs_g = macros.carbs_g,
            "Nutrition calculated"
        );

        if macros.carbs_g < 0.0 {
            warn!(
                carbs_g = macros.carbs_g,
                calories,
                "Protein and fat exceed the calorie target, carbohydrates are negative"
            );
        }

        Ok(NutritionResult {
            clean_weight,
            calories,
            protein_g: macros.protein_g,
            fat_g: macros.fat_g,
            carbs_g: macros.carbs_g,
        })
    }
}

fn validate_profile(profile: &PersonProfile, config: &NutritionConfig) -> AppResult<()> {
    if !profile.total_weight.is_finite() || profile.total_weight <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "total_weight must be a positive, finite number, got {}",
            profile.total_weight
        )));
    }

    let limits = &config.limits;
    if profile.body_fat_pct > limits.max_body_fat_pct {
        return Err(AppError::value_out_of_range(
            "body_fat_pct",
            profile.body_fat_pct,
            &format!("0..={}", limits.max_body_fat_pct),
        ));
    }
    if profile.activity_score > limits.max_activity_score {
        return Err(AppError::value_out_of_range(
            "activity_score",
            profile.activity_score,
            &format!("0..={}", limits.max_activity_score),
        ));
    }
    if profile.age == 0 {
        return Err(AppError::value_out_of_range("age", profile.age, "1.."));
    }

    Ok(())
}

/// Calculate nutrition for a typed profile
///
/// # Errors
///
/// Returns an error if the profile fails validation
pub fn calculate_nutrition(
    profile: &PersonProfile,
    config: &NutritionConfig,
) -> AppResult<NutritionResult> {
    NutrientCalculator::new(*profile, config)?.calculate_nutrition()
}

/// Calculate nutrition from raw string tags using the global configuration
///
/// `sex` must be `"MALE"` or `"FEMALE"`; `goal` must be `"MuscleGain"`,
/// `"FatLoss"` or `"Maintain"`. Matching is exact.
///
/// # Errors
///
/// Returns `InvalidEnumValue` for unknown tags, or a validation error for the numeric inputs
pub fn calculate_nutrition_from_strings(
    sex: &str,
    total_weight: f64,
    body_fat_pct: u32,
    activity_score: u32,
    age: u32,
    stress_level: u32,
    goal: &str,
) -> AppResult<NutritionResult> {
    let profile = PersonProfile {
        sex: sex.parse()?,
        total_weight,
        body_fat_pct,
        activity_score,
        age,
        stress_level,
        goal: goal.parse()?,
    };
    calculate_nutrition(&profile, NutritionConfig::global())
}
