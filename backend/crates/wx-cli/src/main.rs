//! wx - weather dashboard CLI
//!
//! A command-line client for the wx-server REST API.
//!
//! # Examples
//!
//! ```bash
//! # Current weather in Fahrenheit
//! wx weather "Cape Town" --unit fahrenheit --pretty
//!
//! # Save preferences
//! wx prefs set alice --default-city Paris --unit celsius --city Paris --city Tokyo
//! ```

mod cli;
mod commands;
mod prefs_commands;

use crate::{cli::Cli, commands::Commands, prefs_commands::PrefsCommands};

use wx_cli::{Client, convert};
use wx_core::{PreferenceView, TemperatureUnit};

use std::process::ExitCode;

use clap::Parser;

const FALLBACK_SERVER_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = cli.server.clone().unwrap_or_else(default_server_url);
    let client = Client::new(&server_url);

    let result = match cli.command {
        Commands::Weather { city, unit } => client
            .get_weather(&city)
            .await
            .map(|value| convert::weather_in_unit(value, unit.into())),
        Commands::Summary { city, unit } => client
            .get_summary(&city)
            .await
            .map(|value| convert::summary_in_unit(value, unit.into())),
        Commands::Prefs { action } => match action {
            PrefsCommands::Get { user } => client.get_preferences(&user).await,
            PrefsCommands::Set {
                user,
                default_city,
                unit,
                cities,
                notifications,
            } => {
                let preferences = PreferenceView {
                    default_city: default_city.unwrap_or_default(),
                    temperature_unit: unit.map(TemperatureUnit::from).unwrap_or_default(),
                    saved_cities: cities,
                    notifications_enabled: notifications,
                };
                client.save_preferences(&user, &preferences).await
            }
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Server URL from the config directory, without creating it.
///
/// Falls back to the default port when the config fails to parse.
fn default_server_url() -> String {
    let config = wx_config::Config::config_dir().and_then(|dir| wx_config::Config::read(&dir));

    match config {
        Ok(config) => config.server_url(),
        Err(e) => {
            eprintln!("Warning: ignoring unreadable config: {}", e);
            FALLBACK_SERVER_URL.to_string()
        }
    }
}
