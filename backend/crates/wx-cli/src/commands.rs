use crate::prefs_commands::PrefsCommands;

use clap::{Subcommand, ValueEnum};
use wx_core::TemperatureUnit;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Current weather for a city
    Weather {
        /// City name
        city: String,
        /// Display unit for temperatures
        #[arg(long, value_enum, default_value_t = UnitArg::Celsius)]
        unit: UnitArg,
    },

    /// Weather summary with insights
    Summary {
        /// City name
        city: String,
        /// Display unit for temperatures
        #[arg(long, value_enum, default_value_t = UnitArg::Celsius)]
        unit: UnitArg,
    },

    /// User preference operations
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}
