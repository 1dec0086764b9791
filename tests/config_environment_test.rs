// ABOUTME: Tests for nutrition configuration loading from environment variables
// ABOUTME: Validates overrides, parse failures, validation failures and error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrient_calculator::{
    config::{ConfigError, NutritionConfig},
    errors::{AppError, ErrorCode},
    intelligence::calculate_nutrition,
};
use serial_test::serial;
use std::env;

mod common;

const OVERRIDE_VARS: [&str; 9] = [
    "NUTRITION_BASE_KCAL_PER_KG",
    "NUTRITION_HIGH_STRESS_FACTOR",
    "NUTRITION_SENIOR_FACTOR",
    "NUTRITION_GOAL_FAT_LOSS_FACTOR",
    "NUTRITION_GOAL_MAINTAIN_FACTOR",
    "NUTRITION_GOAL_MUSCLE_GAIN_FACTOR",
    "NUTRITION_FALLBACK_LEAN_FACTOR",
    "NUTRITION_MAX_ACTIVITY_SCORE",
    "NUTRITION_MAX_BODY_FAT_PCT",
];

fn clear_overrides() {
    for name in OVERRIDE_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = NutritionConfig::load().unwrap();
    assert_eq!(config, NutritionConfig::default());
}

#[test]
#[serial]
fn test_numeric_overrides_apply() {
    clear_overrides();
    env::set_var("NUTRITION_BASE_KCAL_PER_KG", "30");
    env::set_var("NUTRITION_MAX_ACTIVITY_SCORE", " 15 ");
    env::set_var("NUTRITION_GOAL_MUSCLE_GAIN_FACTOR", "1.2");

    let config = NutritionConfig::load().unwrap();

    assert!((config.calories.base_kcal_per_kg - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.limits.max_activity_score, 15);
    assert!((config.calories.goal_factors.muscle_gain - 1.2).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_overrides_flow_into_calculation() {
    common::init_test_logging();
    clear_overrides();
    env::set_var("NUTRITION_HIGH_STRESS_FACTOR", "1.0");
    env::set_var("NUTRITION_GOAL_MUSCLE_GAIN_FACTOR", "1.0");

    let config = NutritionConfig::load().unwrap();
    let result = calculate_nutrition(&common::reference_profile(), &config).unwrap();

    // 72.5 x 28 with every multiplier neutralised
    common::assert_close(result.calories, 2030.0, "calories");

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_fails_with_parse_error() {
    clear_overrides();
    env::set_var("NUTRITION_MAX_ACTIVITY_SCORE", "lots");

    let err = NutritionConfig::load().unwrap_err();
    match &err {
        ConfigError::Parse(message) => {
            assert!(message.contains("NUTRITION_MAX_ACTIVITY_SCORE"));
            assert!(message.contains("lots"));
        }
        other => panic!("expected Parse error, got {other:?}"),
    }

    clear_overrides();
}

#[test]
#[serial]
fn test_negative_integer_override_fails_to_parse() {
    clear_overrides();
    env::set_var("NUTRITION_MAX_BODY_FAT_PCT", "-5");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    clear_overrides();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_utf8_override_fails_with_parse_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    clear_overrides();
    env::set_var(
        "NUTRITION_BASE_KCAL_PER_KG",
        OsString::from_vec(vec![b'2', 0xff]),
    );

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("NUTRITION_GOAL_FAT_LOSS_FACTOR", "0");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::InvalidFactor(_))
    ));

    env::set_var("NUTRITION_GOAL_FAT_LOSS_FACTOR", "0.85");
    env::set_var("NUTRITION_MAX_BODY_FAT_PCT", "150");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_config_error_converts_to_app_error() {
    clear_overrides();
    env::set_var("NUTRITION_SENIOR_FACTOR", "abc");

    let err: AppError = NutritionConfig::load().unwrap_err().into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.to_string().contains("NUTRITION_SENIOR_FACTOR"));

    clear_overrides();
}

#[test]
fn test_default_config_serializes_to_json() {
    let json = serde_json::to_value(NutritionConfig::default()).unwrap();

    assert_eq!(json["calories"]["base_kcal_per_kg"], 27.0);
    assert_eq!(json["limits"]["max_activity_score"], 10);
    assert!(json["lean_mass"]["male"].is_array());
}
