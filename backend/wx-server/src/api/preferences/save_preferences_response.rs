use serde::{Deserialize, Serialize};

pub const SAVED_MESSAGE: &str = "Preferences saved successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePreferencesResponse {
    pub success: bool,
    pub message: String,
}

impl SavePreferencesResponse {
    pub fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_string(),
        }
    }
}
