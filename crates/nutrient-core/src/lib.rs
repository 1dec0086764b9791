// ABOUTME: Core types and constants for the nutrient calculator
// ABOUTME: Foundation crate with error handling and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrient Core
//!
//! Foundation crate providing shared types and constants for the nutrient
//! calculator. It changes rarely, so the main crate can rebuild without it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, canonical enum tags and service names

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;
