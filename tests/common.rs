// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and reusable person profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(dead_code, clippy::must_use_candidate, clippy::missing_panics_doc)]
//! Shared test utilities for `nutrient_calculator`

use nutrient_calculator::intelligence::{Goal, PersonProfile, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, WARN keeps runs quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The worked example: 100 total, 25% body fat, lightly active, young, high stress
pub fn reference_profile() -> PersonProfile {
    PersonProfile {
        sex: Sex::Male,
        total_weight: 100.0,
        body_fat_pct: 25,
        activity_score: 1,
        age: 23,
        stress_level: 5,
        goal: Goal::MuscleGain,
    }
}

/// Reference profile with a different sex and goal
pub fn profile_with(sex: Sex, goal: Goal) -> PersonProfile {
    PersonProfile {
        sex,
        goal,
        ..reference_profile()
    }
}

/// Assert two floats agree to within `1e-6`
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}
