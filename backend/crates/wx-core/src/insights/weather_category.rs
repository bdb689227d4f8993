use serde::{Deserialize, Serialize};

/// Condition buckets used to pick activities and health tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCategory {
    #[default]
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
}

impl WeatherCategory {
    /// Map free-form provider conditions ("light rain", "scattered clouds")
    /// to a category. Unknown text falls back to `Clear`.
    pub fn from_conditions(conditions: &str) -> Self {
        let conditions = conditions.to_lowercase();

        if conditions.contains("clear") {
            Self::Clear
        } else if conditions.contains("cloud") {
            Self::Clouds
        } else if conditions.contains("rain") || conditions.contains("drizzle") {
            Self::Rain
        } else if conditions.contains("snow") {
            Self::Snow
        } else if conditions.contains("thunder") || conditions.contains("storm") {
            Self::Thunderstorm
        } else if conditions.contains("fog")
            || conditions.contains("mist")
            || conditions.contains("haze")
        {
            Self::Mist
        } else {
            Self::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Mist => "Mist",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
