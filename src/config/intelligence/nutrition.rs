// ABOUTME: Nutrition configuration for lean mass, calorie and macronutrient estimation
// ABOUTME: Bracket tables and multipliers with defaults, lookups and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimation Configuration
//!
//! Every coefficient used by the nutrient calculator lives here so that it can
//! be inspected (`nutrient-cli config show`) and overridden from the environment.
//!
//! The model has three stages:
//! - lean mass: total weight scaled by a body-fat bracket factor (per sex)
//! - calories: lean mass times `base + activity`, scaled by age, stress and goal
//! - macros: protein and fat per unit of lean mass (per sex and goal), carbs fill the rest

use crate::config::intelligence::error::ConfigError;
use crate::constants::limits::{DEFAULT_MAX_ACTIVITY_SCORE, MAX_BODY_FAT_PCT};
use crate::intelligence::nutrition_calculator::{Goal, Sex};
use serde::{Deserialize, Serialize};

/// Nutrition Estimation Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Body-fat bracket tables used to derive lean (clean) weight
    pub lean_mass: LeanMassConfig,
    /// Calorie base and age / stress / goal multipliers
    pub calories: CalorieConfig,
    /// Protein and fat ratios per sex and goal
    pub macronutrients: MacronutrientConfig,
    /// Input limits checked before estimation
    pub limits: InputLimitsConfig,
}

/// One row of a body-fat bracket table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatBracket {
    /// Inclusive upper bound of this bracket (body-fat percent)
    pub max_body_fat_pct: u32,
    /// Fraction of total weight considered lean
    pub lean_factor: f64,
}

impl BodyFatBracket {
    const fn new(max_body_fat_pct: u32, lean_factor: f64) -> Self {
        Self {
            max_body_fat_pct,
            lean_factor,
        }
    }
}

/// Lean mass estimation configuration
///
/// Brackets are ordered by ascending `max_body_fat_pct`; anything above the
/// last bracket uses `fallback_lean_factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeanMassConfig {
    /// Male body-fat brackets
    pub male: Vec<BodyFatBracket>,
    /// Female body-fat brackets
    pub female: Vec<BodyFatBracket>,
    /// Lean factor above the last bracket
    pub fallback_lean_factor: f64,
}

impl LeanMassConfig {
    /// Bracket table for the given sex
    #[must_use]
    pub fn brackets_for(&self, sex: Sex) -> &[BodyFatBracket] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Lean factor for a body-fat percentage
    #[must_use]
    pub fn lean_factor(&self, sex: Sex, body_fat_pct: u32) -> f64 {
        self.brackets_for(sex)
            .iter()
            .find(|bracket| body_fat_pct <= bracket.max_body_fat_pct)
            .map_or(self.fallback_lean_factor, |bracket| bracket.lean_factor)
    }
}

impl Default for LeanMassConfig {
    fn default() -> Self {
        Self {
            male: vec![
                BodyFatBracket::new(11, 0.9),
                BodyFatBracket::new(14, 0.865),
                BodyFatBracket::new(19, 0.825),
                BodyFatBracket::new(24, 0.775),
                BodyFatBracket::new(29, 0.725),
                BodyFatBracket::new(34, 0.675),
            ],
            // Female brackets sit a few points higher for the same lean factor
            female: vec![
                BodyFatBracket::new(14, 0.9),
                BodyFatBracket::new(18, 0.865),
                BodyFatBracket::new(21, 0.825),
                BodyFatBracket::new(26, 0.775),
                BodyFatBracket::new(31, 0.725),
                BodyFatBracket::new(36, 0.675),
            ],
            fallback_lean_factor: 0.6,
        }
    }
}

/// One row of the age multiplier table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBracket {
    /// Inclusive upper bound of this bracket (years)
    pub max_age: u32,
    /// Calorie multiplier
    pub factor: f64,
}

/// Calorie multipliers per goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalFactorsConfig {
    /// Caloric deficit for fat loss
    pub fat_loss: f64,
    /// Caloric balance
    pub maintain: f64,
    /// Caloric surplus for muscle gain
    pub muscle_gain: f64,
}

impl Default for GoalFactorsConfig {
    fn default() -> Self {
        Self {
            fat_loss: 0.85,
            maintain: 1.0,
            muscle_gain: 1.15,
        }
    }
}

/// Calorie estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Base kcal per unit of lean mass; the activity score is added to it
    pub base_kcal_per_kg: f64,
    /// Age multipliers, ascending by `max_age`
    pub age_brackets: Vec<AgeBracket>,
    /// Multiplier above the last age bracket
    pub senior_factor: f64,
    /// Multipliers for stress levels 1 through 4
    pub stress_factors: [f64; 4],
    /// Multiplier for every other stress level (0 and 5+)
    pub high_stress_factor: f64,
    /// Goal multipliers
    pub goal_factors: GoalFactorsConfig,
}

impl CalorieConfig {
    /// Age multiplier
    #[must_use]
    pub fn age_factor(&self, age: u32) -> f64 {
        self.age_brackets
            .iter()
            .find(|bracket| age <= bracket.max_age)
            .map_or(self.senior_factor, |bracket| bracket.factor)
    }

    /// Stress multiplier
    #[must_use]
    pub fn stress_factor(&self, stress_level: u32) -> f64 {
        match stress_level {
            1..=4 => self.stress_factors[(stress_level - 1) as usize],
            _ => self.high_stress_factor,
        }
    }

    /// Goal multiplier
    #[must_use]
    pub const fn goal_factor(&self, goal: Goal) -> f64 {
        match goal {
            Goal::FatLoss => self.goal_factors.fat_loss,
            Goal::Maintain => self.goal_factors.maintain,
            Goal::MuscleGain => self.goal_factors.muscle_gain,
        }
    }
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            base_kcal_per_kg: 27.0,
            age_brackets: vec![
                AgeBracket {
                    max_age: 24,
                    factor: 1.0,
                },
                AgeBracket {
                    max_age: 34,
                    factor: 0.97,
                },
                AgeBracket {
                    max_age: 44,
                    factor: 0.94,
                },
                AgeBracket {
                    max_age: 54,
                    factor: 0.91,
                },
                AgeBracket {
                    max_age: 64,
                    factor: 0.88,
                },
            ],
            senior_factor: 0.84,
            stress_factors: [1.065, 1.13, 1.195, 1.26],
            high_stress_factor: 1.325,
            goal_factors: GoalFactorsConfig::default(),
        }
    }
}

/// Protein and fat grams per unit of lean mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein grams per unit of lean mass
    pub protein_per_kg: f64,
    /// Fat grams per unit of lean mass
    pub fat_per_kg: f64,
}

impl MacroRatio {
    const fn new(protein_per_kg: f64, fat_per_kg: f64) -> Self {
        Self {
            protein_per_kg,
            fat_per_kg,
        }
    }
}

/// Macro ratios for every goal of one sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalMacroRatios {
    /// Ratios while building muscle
    pub muscle_gain: MacroRatio,
    /// Ratios while maintaining
    pub maintain: MacroRatio,
    /// Ratios while cutting
    pub fat_loss: MacroRatio,
}

impl GoalMacroRatios {
    /// Ratio for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroRatio {
        match goal {
            Goal::MuscleGain => self.muscle_gain,
            Goal::Maintain => self.maintain,
            Goal::FatLoss => self.fat_loss,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, MacroRatio)> {
        [
            ("muscle_gain", self.muscle_gain),
            ("maintain", self.maintain),
            ("fat_loss", self.fat_loss),
        ]
        .into_iter()
    }
}

/// Macronutrient distribution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Male ratios
    pub male: GoalMacroRatios,
    /// Female ratios
    pub female: GoalMacroRatios,
}

impl MacronutrientConfig {
    /// Ratio for a sex and goal
    #[must_use]
    pub const fn ratio_for(&self, sex: Sex, goal: Goal) -> MacroRatio {
        match sex {
            Sex::Male => self.male.for_goal(goal),
            Sex::Female => self.female.for_goal(goal),
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            male: GoalMacroRatios {
                muscle_gain: MacroRatio::new(1.5, 1.0),
                maintain: MacroRatio::new(2.0, 0.9),
                fat_loss: MacroRatio::new(3.0, 0.8),
            },
            female: GoalMacroRatios {
                muscle_gain: MacroRatio::new(1.0, 1.5),
                maintain: MacroRatio::new(1.5, 1.2),
                fat_loss: MacroRatio::new(2.0, 1.0),
            },
        }
    }
}

/// Input limits checked before estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimitsConfig {
    /// Highest accepted body-fat percentage
    pub max_body_fat_pct: u32,
    /// Highest accepted daily activity score
    pub max_activity_score: u32,
}

impl Default for InputLimitsConfig {
    fn default() -> Self {
        Self {
            max_body_fat_pct: MAX_BODY_FAT_PCT,
            max_activity_score: DEFAULT_MAX_ACTIVITY_SCORE,
        }
    }
}

fn check_factor(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFactor(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

fn validate_brackets(name: &str, brackets: &[BodyFatBracket]) -> Result<(), ConfigError> {
    if brackets.is_empty() {
        return Err(ConfigError::InvalidRange(format!(
            "{name} lean mass brackets must not be empty"
        )));
    }
    for pair in brackets.windows(2) {
        if pair[0].max_body_fat_pct >= pair[1].max_body_fat_pct {
            return Err(ConfigError::InvalidRange(format!(
                "{name} lean mass brackets must be strictly ascending ({} then {})",
                pair[0].max_body_fat_pct, pair[1].max_body_fat_pct
            )));
        }
    }
    for bracket in brackets {
        check_factor(&format!("{name} lean factor"), bracket.lean_factor)?;
        if bracket.lean_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} lean factor must be <= 1.0, got {}",
                bracket.lean_factor
            )));
        }
    }
    Ok(())
}

impl NutritionConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a bracket table is empty or out of order, a
    /// multiplier is not positive, a lean factor exceeds 1.0, or the body-fat
    /// limit exceeds 100 percent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_lean_mass()?;
        self.validate_calories()?;
        self.validate_macronutrients()?;

        if self.limits.max_body_fat_pct > MAX_BODY_FAT_PCT {
            return Err(ConfigError::ValueOutOfRange(format!(
                "max_body_fat_pct must be <= {MAX_BODY_FAT_PCT}, got {}",
                self.limits.max_body_fat_pct
            )));
        }

        Ok(())
    }

    fn validate_lean_mass(&self) -> Result<(), ConfigError> {
        validate_brackets("male", &self.lean_mass.male)?;
        validate_brackets("female", &self.lean_mass.female)?;
        check_factor("fallback_lean_factor", self.lean_mass.fallback_lean_factor)?;
        if self.lean_mass.fallback_lean_factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fallback_lean_factor must be <= 1.0, got {}",
                self.lean_mass.fallback_lean_factor
            )));
        }
        Ok(())
    }

    fn validate_calories(&self) -> Result<(), ConfigError> {
        let cal = &self.calories;

        check_factor("base_kcal_per_kg", cal.base_kcal_per_kg)?;

        for pair in cal.age_brackets.windows(2) {
            if pair[0].max_age >= pair[1].max_age {
                return Err(ConfigError::InvalidRange(format!(
                    "age brackets must be strictly ascending ({} then {})",
                    pair[0].max_age, pair[1].max_age
                )));
            }
        }
        for bracket in &cal.age_brackets {
            check_factor("age factor", bracket.factor)?;
        }
        check_factor("senior_factor", cal.senior_factor)?;

        for (index, factor) in cal.stress_factors.iter().enumerate() {
            check_factor(&format!("stress factor (level {})", index + 1), *factor)?;
        }
        check_factor("high_stress_factor", cal.high_stress_factor)?;

        check_factor("goal_factors.fat_loss", cal.goal_factors.fat_loss)?;
        check_factor("goal_factors.maintain", cal.goal_factors.maintain)?;
        check_factor("goal_factors.muscle_gain", cal.goal_factors.muscle_gain)?;

        Ok(())
    }

    fn validate_macronutrients(&self) -> Result<(), ConfigError> {
        for (sex, ratios) in [
            ("male", &self.macronutrients.male),
            ("female", &self.macronutrients.female),
        ] {
            for (goal, ratio) in ratios.iter() {
                check_factor(&format!("{sex}.{goal}.protein_per_kg"), ratio.protein_per_kg)?;
                check_factor(&format!("{sex}.{goal}.fat_per_kg"), ratio.fat_per_kg)?;
            }
        }
        Ok(())
    }
}
