pub mod memory_preference_store;
pub mod sqlite_preference_store;

use crate::Result;

use wx_core::{PreferenceLookup, PreferenceView};

use async_trait::async_trait;

/// Durable home of user preferences.
///
/// Both operations are atomic per user: a reader never observes a
/// half-applied `save`, and a failed `save` leaves the previous state intact.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a user's preferences, creating the default record on first sight
    async fn find_or_default(&self, user_id: &str) -> Result<PreferenceLookup>;

    /// Replace a user's preferences, including the whole saved-cities list.
    ///
    /// Duplicate saved cities are collapsed, first occurrence wins.
    async fn save(&self, user_id: &str, preferences: &PreferenceView) -> Result<()>;

    /// Cheap round-trip used by readiness checks
    async fn ping(&self) -> Result<()>;
}
