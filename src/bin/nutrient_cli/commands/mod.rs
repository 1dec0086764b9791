// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrient-cli
// ABOUTME: Provides calculate, batch and config command handlers

pub mod batch;
pub mod calculate;
pub mod config;
