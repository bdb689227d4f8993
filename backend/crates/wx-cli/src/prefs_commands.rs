use crate::commands::UnitArg;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum PrefsCommands {
    /// Show a user's preferences (created with defaults on first access)
    Get {
        /// User ID
        user: String,
    },
    /// Replace a user's preferences
    Set {
        /// User ID
        user: String,
        /// Default city shown on load
        #[arg(long)]
        default_city: Option<String>,
        /// Preferred temperature unit
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,
        /// Saved city (repeatable)
        #[arg(long = "city")]
        cities: Vec<String>,
        /// Enable notifications
        #[arg(long)]
        notifications: bool,
    },
}
