use serde::{Deserialize, Serialize};

/// A city a user bookmarked. (user_id, city_name) is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCity {
    pub id: i64,
    pub user_id: String,
    pub city_name: String,
}
