// ABOUTME: NutriSnap CLI - recognize food photos, scale portions, and keep a daily food log
// ABOUTME: Wires environment configuration, the external clients, and the SQLite food log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recognize the foods in a photo
//! nutrisnap-cli analyze ./lunch.jpg
//!
//! # Nutrition of 250 g of a food
//! nutrisnap-cli scale pizza --grams 250
//!
//! # Log 150 g of rice for dinner
//! nutrisnap-cli log rice --grams 150 --meal dinner --user alice
//!
//! # Today's totals and meals
//! nutrisnap-cli today --user alice
//!
//! # Save a body profile
//! nutrisnap-cli profile set --user alice --name Alice --age 34 \
//!     --weight-kg 70 --height-cm 175 --gender female
//!
//! # Body mass index, from arguments or the saved profile
//! nutrisnap-cli bmi --weight-kg 70 --height-cm 175
//! nutrisnap-cli bmi --user alice
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutrisnap::{
    config::{AppConfig, DatabaseUrl},
    constants::nutrition::DEFAULT_ENTRY_WEIGHT_GRAMS,
    database::Database,
    external::init_shared_client,
    logging::{init_from_env, LoggingConfig},
    models::UserRef,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "nutrisnap-cli",
    about = "NutriSnap food recognition CLI",
    long_about = "Recognize foods in photos, look up and scale their nutrition, and keep a daily food log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recognize foods in an image and resolve their nutrition
    Analyze {
        /// Path to a JPEG or PNG photo
        image: PathBuf,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a food and scale its nutrition to an eaten weight
    Scale {
        /// Food label, e.g. "pizza" or "2 piece sushi"
        label: String,

        /// Eaten weight in grams (defaults to the reference serving)
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Look up a food and add it to the food log
    Log {
        /// Food label
        label: String,

        /// Eaten weight in grams
        #[arg(long, default_value_t = DEFAULT_ENTRY_WEIGHT_GRAMS)]
        grams: f64,

        /// Meal type (breakfast, lunch, dinner, snack, other)
        #[arg(long, default_value = "breakfast")]
        meal: String,

        /// User the food is logged for
        #[arg(long, env = "NUTRISNAP_USER")]
        user: String,
    },

    /// Show totals, meals, and target progress for one day
    Today {
        /// User whose log is summarized
        #[arg(long, env = "NUTRISNAP_USER")]
        user: String,

        /// UTC day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Register a user and manage their body profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Compute body mass index
    Bmi {
        /// Body weight in kilograms (defaults to the saved profile)
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Height in centimeters (defaults to the saved profile)
        #[arg(long)]
        height_cm: Option<f64>,

        /// User whose saved profile fills in missing measurements
        #[arg(long, env = "NUTRISNAP_USER")]
        user: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Register the user and save their age, weight, height, and gender
    Set {
        /// User the profile belongs to
        #[arg(long, env = "NUTRISNAP_USER")]
        user: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Gender (male, female, other)
        #[arg(long)]
        gender: String,
    },

    /// Show the saved profile
    Show {
        /// User whose profile is shown
        #[arg(long, env = "NUTRISNAP_USER")]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let mut logging = LoggingConfig::from_env();
        "debug".clone_into(&mut logging.level);
        logging.init()?;
    } else {
        init_from_env()?;
    }

    let config = AppConfig::from_env()?;
    if !init_shared_client(config.http_client) {
        debug!("Shared HTTP client already initialized");
    }

    match cli.command {
        Command::Analyze { image, json } => {
            commands::recognize::analyze(&config, &image, json).await?;
        }
        Command::Scale { label, grams } => {
            commands::nutrition::scale(&config, &label, grams).await?;
        }
        Command::Log {
            label,
            grams,
            meal,
            user,
        } => {
            let database = open_database(&config, cli.database_url.as_deref()).await?;
            commands::nutrition::log(&config, &database, &label, grams, &meal, &user).await?;
        }
        Command::Today { user, date } => {
            let database = open_database(&config, cli.database_url.as_deref()).await?;
            commands::summary::today(&database, &user, date).await?;
        }
        Command::Profile { action } => {
            let database = open_database(&config, cli.database_url.as_deref()).await?;
            match action {
                ProfileCommand::Set {
                    user,
                    name,
                    age,
                    weight_kg,
                    height_cm,
                    gender,
                } => {
                    let input = commands::profile::ProfileInput {
                        name: &name,
                        age,
                        weight_kg,
                        height_cm,
                        gender: &gender,
                    };
                    commands::profile::set(&database, &user, &input).await?;
                }
                ProfileCommand::Show { user } => {
                    commands::profile::show(&database, &user).await?;
                }
            }
        }
        Command::Bmi {
            weight_kg,
            height_cm,
            user,
        } => {
            let profile = match user {
                Some(user) if weight_kg.is_none() || height_cm.is_none() => {
                    let database = open_database(&config, cli.database_url.as_deref()).await?;
                    database.users().user_details(&UserRef::new(user)?).await?
                }
                _ => None,
            };
            commands::body::bmi(weight_kg, height_cm, profile.as_ref())?;
        }
    }

    Ok(())
}

async fn open_database(config: &AppConfig, url_override: Option<&str>) -> Result<Database> {
    let url = match url_override {
        Some(raw) => DatabaseUrl::parse_url(raw)?,
        None => config.database_url.clone(),
    };
    info!("Connecting to database: {}", url);
    Ok(Database::connect(&url).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrisnap::models::MealType;

    #[test]
    fn test_log_defaults_to_breakfast() {
        let cli = Cli::try_parse_from(["nutrisnap-cli", "log", "rice", "--user", "alice"]).unwrap();

        let Command::Log { meal, grams, .. } = cli.command else {
            unreachable!("`log` parses to the log command");
        };
        assert_eq!(MealType::from_str_lossy(&meal), MealType::default());
        assert_eq!(MealType::from_str_lossy(&meal), MealType::Breakfast);
        assert!((grams - DEFAULT_ENTRY_WEIGHT_GRAMS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_measurements_are_optional() {
        let cli = Cli::try_parse_from(["nutrisnap-cli", "bmi", "--user", "alice"]).unwrap();

        let Command::Bmi {
            weight_kg,
            height_cm,
            user,
        } = cli.command
        else {
            unreachable!("`bmi` parses to the bmi command");
        };
        assert!(weight_kg.is_none());
        assert!(height_cm.is_none());
        assert_eq!(user.as_deref(), Some("alice"));
    }
}
