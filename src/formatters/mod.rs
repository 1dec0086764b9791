// ABOUTME: Output format abstraction for rendering nutrition results
// ABOUTME: Supports human-readable text, JSON, and the plain five-value tuple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Labelled, rounded values with macro percentages (default)
//! - **JSON**: Machine-readable, pretty printed
//! - **Tuple**: `(clean_weight, calories, protein, fat, carbs)` with full precision

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::batch::BatchItem;
use crate::intelligence::nutrition_calculator::NutritionResult;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled text for terminals (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// Bare five-value tuple
    Tuple,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "tuple" => Ok(Self::Tuple),
            other => Err(AppError::new(
                ErrorCode::InvalidFormat,
                format!("unknown output format '{other}', expected text, json or tuple"),
            )),
        }
    }
}

/// Serialize data to pretty-printed JSON
///
/// # Errors
///
/// Returns `SerializationError` if the data cannot be serialized
pub fn to_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render a single result
///
/// # Errors
///
/// Returns `SerializationError` if JSON serialization fails
pub fn format_result(result: &NutritionResult, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Tuple => Ok(format!("{:?}", result.as_tuple())),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

/// Render a batch report
///
/// Tuple format writes one tuple per line, with `error: ...` lines for rejected profiles.
///
/// # Errors
///
/// Returns `SerializationError` if JSON serialization fails
pub fn format_batch(items: &[BatchItem], format: OutputFormat) -> AppResult<String> {
    if format == OutputFormat::Json {
        return to_json(&items);
    }

    let mut out = String::new();
    for item in items {
        match (&item.result, &item.error) {
            (Some(result), _) => {
                let body = format_result(result, format)?;
                if format == OutputFormat::Text {
                    let _ = writeln!(out, "[{}]", item.index);
                }
                let _ = writeln!(out, "{body}");
            }
            (None, Some(error)) => {
                let _ = writeln!(out, "[{}] error: {}", item.index, error.message);
            }
            (None, None) => {}
        }
    }
    Ok(out)
}

fn render_text(result: &NutritionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Clean weight: {:>9.1}", result.clean_weight);
    let _ = writeln!(out, "Calories:     {:>9.0} kcal", result.calories);
    let _ = writeln!(out, "Protein:      {:>9.1} g", result.protein_g);
    let _ = writeln!(out, "Fat:          {:>9.1} g", result.fat_g);
    let _ = write!(out, "Carbs:        {:>9.1} g", result.carbs_g);

    if let Some(pct) = result.macro_percentages() {
        let _ = write!(
            out,
            "\nSplit:        P {:.0}% / F {:.0}% / C {:.0}%",
            pct.protein_percent, pct.fat_percent, pct.carbs_percent
        );
    }
    out
}
