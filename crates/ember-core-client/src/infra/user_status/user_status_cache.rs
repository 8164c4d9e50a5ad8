// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::warn;

use crate::app::deps::DynKeyValueStore;
use crate::domain::user_status::models::UserStatus;

/// Persists the list of statuses so that startup doesn't depend on the network.
#[derive(Clone)]
pub struct UserStatusCache {
    store: DynKeyValueStore,
}

impl UserStatusCache {
    pub const CACHE_KEY: &'static str = "user_status_map_cache_v1";

    pub fn new(store: DynKeyValueStore) -> Self {
        Self { store }
    }

    /// Returns `None` if nothing is cached or if the cached value is unreadable, not a list
    /// or empty.
    pub async fn load(&self) -> Option<Vec<UserStatus>> {
        let raw = match self.store.get(Self::CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read cached user statuses. {err:?}");
                return None;
            }
        };

        match serde_json::from_str::<Vec<UserStatus>>(&raw) {
            Ok(statuses) if !statuses.is_empty() => Some(statuses),
            Ok(_) => None,
            Err(err) => {
                warn!("Ignoring unreadable user status cache. {err}");
                None
            }
        }
    }

    pub async fn save(&self, statuses: &[UserStatus]) -> Result<()> {
        self.store
            .set(Self::CACHE_KEY, &serde_json::to_string(statuses)?)
            .await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(Self::CACHE_KEY).await
    }
}
