use crate::{PreferenceStore, Result};

use wx_core::{PreferenceLookup, PreferenceView};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store for tests and throwaway runs. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    users: RwLock<HashMap<String, PreferenceView>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn find_or_default(&self, user_id: &str) -> Result<PreferenceLookup> {
        if let Some(view) = self.users.read().await.get(user_id) {
            return Ok(PreferenceLookup::Existing(view.clone()));
        }

        let mut users = self.users.write().await;
        if let Some(view) = users.get(user_id) {
            return Ok(PreferenceLookup::Existing(view.clone()));
        }

        let view = PreferenceView::default();
        users.insert(user_id.to_string(), view.clone());
        Ok(PreferenceLookup::Created(view))
    }

    async fn save(&self, user_id: &str, preferences: &PreferenceView) -> Result<()> {
        let normalized = preferences.normalized();
        self.users
            .write()
            .await
            .insert(user_id.to_string(), normalized);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
