use serde::{Deserialize, Serialize};

/// Advisory text produced for a city's current conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub personalized_message: String,
    pub clothing_recommendation: String,
    pub activity_suggestion: String,
    pub health_tip: String,
}
