// ABOUTME: Batch nutrition estimation over many profiles using rayon
// ABOUTME: Loads profile arrays from JSON and keeps per-profile failures isolated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::NutritionConfig;
use crate::errors::{AppResult, ErrorResponse, ErrorResponseDetails};
use crate::intelligence::nutrition_calculator::{calculate_nutrition, NutritionResult, PersonProfile};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Outcome for one profile of a batch, in input order
#[derive(Debug, Serialize)]
pub struct BatchItem {
    /// Position in the input array
    pub index: usize,
    /// Result when the profile was valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<NutritionResult>,
    /// Error when the profile was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponseDetails>,
}

/// Calculate nutrition for every profile in parallel.
///
/// Output order matches input order. One invalid profile does not affect the others.
#[must_use]
pub fn calculate_batch(
    profiles: &[PersonProfile],
    config: &NutritionConfig,
) -> Vec<AppResult<NutritionResult>> {
    let results: Vec<_> = profiles
        .par_iter()
        .map(|profile| calculate_nutrition(profile, config))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        profiles = profiles.len(),
        failed, "Batch nutrition calculation finished"
    );
    results
}

/// Pair each batch result with its index for reporting
#[must_use]
pub fn summarize(results: Vec<AppResult<NutritionResult>>) -> Vec<BatchItem> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| match outcome {
            Ok(result) => BatchItem {
                index,
                result: Some(result),
                error: None,
            },
            Err(e) => BatchItem {
                index,
                result: None,
                error: Some(ErrorResponse::from(e).error),
            },
        })
        .collect()
}

/// Parse a JSON array of profiles
///
/// # Errors
///
/// Returns `SerializationError` if the input is not a JSON array of profiles
pub fn load_profiles<R: Read>(reader: R) -> AppResult<Vec<PersonProfile>> {
    let profiles: Vec<PersonProfile> = serde_json::from_reader(reader)?;
    debug!(count = profiles.len(), "Profiles loaded");
    Ok(profiles)
}

/// Read and parse a JSON profile file
///
/// # Errors
///
/// Returns `InputUnavailable` if the file is missing or unreadable, or `SerializationError` if it is malformed
pub fn load_profiles_from_path(path: &Path) -> AppResult<Vec<PersonProfile>> {
    let file = File::open(path)?;
    load_profiles(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ErrorCode};
    use crate::intelligence::nutrition_calculator::{Goal, Sex};

    #[test]
    fn test_load_profiles_parses_canonical_tags() {
        let json = r#"[
            {"sex": "MALE", "total_weight": 100.0, "body_fat_pct": 25,
             "activity_score": 1, "age": 23, "stress_level": 5, "goal": "MuscleGain"}
        ]"#;

        let profiles = load_profiles(json.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].sex, Sex::Male);
        assert_eq!(profiles[0].goal, Goal::MuscleGain);
    }

    #[test]
    fn test_load_profiles_rejects_unknown_tag() {
        let json = r#"[
            {"sex": "male", "total_weight": 100.0, "body_fat_pct": 25,
             "activity_score": 1, "age": 23, "stress_level": 5, "goal": "MuscleGain"}
        ]"#;

        let err = load_profiles(json.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_summarize_keeps_errors_in_place() {
        let results = vec![
            Ok(NutritionResult {
                clean_weight: 1.0,
                calories: 2.0,
                protein_g: 3.0,
                fat_g: 4.0,
                carbs_g: 5.0,
            }),
            Err(AppError::invalid_input("bad weight")),
        ];

        let items = summarize(results);
        assert!(items[0].result.is_some());
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].error.as_ref().unwrap().code, ErrorCode::InvalidInput);
    }
}
