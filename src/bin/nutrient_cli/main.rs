// ABOUTME: nutrient-cli - command-line front end for the nutrient calculator
// ABOUTME: Single-profile calculation, JSON batch files and configuration display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate daily targets for one person
//! nutrient-cli calculate --sex MALE --weight 100 --body-fat 25 --activity 1 \
//!     --age 23 --stress 5 --goal MuscleGain
//!
//! # Same, printed as the bare five-value tuple
//! nutrient-cli calculate --sex FEMALE --weight 60 --body-fat 22 --activity 3 \
//!     --age 31 --stress 2 --goal FatLoss --format tuple
//!
//! # Evaluate a JSON array of profiles
//! nutrient-cli batch profiles.json --format json
//!
//! # Show the effective configuration
//! nutrient-cli config show
//! ```

mod commands;

use clap::{Parser, Subcommand};
use nutrient_calculator::{
    errors::{AppError, ErrorResponse},
    formatters::OutputFormat,
    intelligence::{Goal, Sex},
    logging::LoggingConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nutrient-cli",
    version,
    about = "Daily nutrition targets from body composition and goals",
    long_about = "Estimates lean weight, daily calories and protein/fat/carbohydrate grams from sex, weight, body fat, activity, age, stress and goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate nutrition for a single profile
    Calculate {
        /// Sex tag (MALE or FEMALE)
        #[arg(long)]
        sex: Sex,

        /// Total body weight
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Body fat percentage
        #[arg(long)]
        body_fat: u32,

        /// Daily activity score
        #[arg(long)]
        activity: u32,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Stress level (1-4, anything else counts as highest)
        #[arg(long)]
        stress: u32,

        /// Goal tag (MuscleGain, FatLoss or Maintain)
        #[arg(long)]
        goal: Goal,

        /// Output format (text, json, tuple)
        #[arg(long, short = 'f', default_value = "text")]
        format: OutputFormat,
    },

    /// Calculate nutrition for every profile in a JSON array file
    Batch {
        /// Path to the profile file
        file: PathBuf,

        /// Output format (text, json, tuple)
        #[arg(long, short = 'f', default_value = "text")]
        format: OutputFormat,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,
}

impl Command {
    const fn format(&self) -> OutputFormat {
        match self {
            Self::Calculate { format, .. } | Self::Batch { format, .. } => *format,
            Self::Config { .. } => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging unavailable: {e}");
    }

    let format = cli.command.format();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let status = u8::try_from(e.exit_code()).unwrap_or(1);
            report_error(e, format);
            ExitCode::from(status)
        }
    }
}

fn run(command: Command) -> Result<String, AppError> {
    match command {
        Command::Calculate {
            sex,
            weight,
            body_fat,
            activity,
            age,
            stress,
            goal,
            format,
        } => commands::calculate::run(
            commands::calculate::ProfileArgs {
                sex,
                weight,
                body_fat,
                activity,
                age,
                stress,
                goal,
            },
            format,
        ),
        Command::Batch { file, format } => commands::batch::run(&file, format),
        Command::Config { action } => match action {
            ConfigCommand::Show => commands::config::show(),
        },
    }
}

fn report_error(error: AppError, format: OutputFormat) {
    if format == OutputFormat::Json {
        let response = ErrorResponse::from(error);
        match serde_json::to_string_pretty(&response) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("error: {}", response.error.message),
        }
    } else {
        eprintln!("error: {error}");
    }
}
