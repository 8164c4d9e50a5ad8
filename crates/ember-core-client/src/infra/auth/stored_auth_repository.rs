// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::warn;

use crate::app::deps::DynKeyValueStore;
use crate::domain::auth::models::{AuthTokens, UserData};
use crate::domain::auth::repos::AuthRepository;

mod keys {
    pub const SESSION_JWT: &str = "session_jwt";
    pub const SESSION_TOKEN: &str = "session_token";
    pub const USER_ID: &str = "user_id";
    pub const USER_DATA: &str = "user_data";
    pub const IS_AUTHENTICATED: &str = "is_authenticated";
}

/// Stores the session tokens in the platform's secure storage and everything else in the
/// regular key-value store. If the secure storage fails, the regular store is used instead.
pub struct StoredAuthRepository {
    secure_store: DynKeyValueStore,
    store: DynKeyValueStore,
}

impl StoredAuthRepository {
    pub fn new(secure_store: DynKeyValueStore, store: DynKeyValueStore) -> Self {
        Self {
            secure_store,
            store,
        }
    }
}

impl StoredAuthRepository {
    async fn get_secure(&self, key: &str) -> Result<Option<String>> {
        match self.secure_store.get(key).await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("Failed to read {key} from secure storage. Falling back. {err:?}");
                self.store.get(key).await
            }
        }
    }

    async fn set_secure(&self, key: &str, value: &str) -> Result<()> {
        match self.secure_store.set(key, value).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to write {key} to secure storage. Falling back. {err:?}");
                self.store.set(key, value).await
            }
        }
    }

    async fn remove_secure(&self, key: &str) -> Result<()> {
        match self.secure_store.remove(key).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to remove {key} from secure storage. Falling back. {err:?}");
                self.store.remove(key).await
            }
        }
    }
}

#[async_trait]
impl AuthRepository for StoredAuthRepository {
    async fn load_tokens(&self) -> Result<Option<AuthTokens>> {
        let (session_jwt, session_token, user_id) = futures::try_join!(
            self.get_secure(keys::SESSION_JWT),
            self.get_secure(keys::SESSION_TOKEN),
            self.store.get(keys::USER_ID)
        )?;

        let (Some(session_jwt), Some(session_token), Some(user_id)) =
            (session_jwt, session_token, user_id)
        else {
            return Ok(None);
        };

        if session_jwt.is_empty() || session_token.is_empty() || user_id.is_empty() {
            return Ok(None);
        }

        Ok(Some(AuthTokens::new(session_jwt, session_token, user_id)))
    }

    async fn load_user(&self) -> Result<Option<UserData>> {
        let Some(raw) = self.store.get(keys::USER_DATA).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserData>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("Ignoring unreadable user data. {err}");
                Ok(None)
            }
        }
    }

    async fn store_tokens(&self, tokens: &AuthTokens) -> Result<()> {
        futures::try_join!(
            self.set_secure(keys::SESSION_JWT, tokens.session_jwt.expose_secret()),
            self.set_secure(keys::SESSION_TOKEN, tokens.session_token.expose_secret()),
            self.store.set(keys::USER_ID, tokens.user_id.as_ref()),
            self.store.set(keys::IS_AUTHENTICATED, "true")
        )?;
        Ok(())
    }

    async fn store_user(&self, user: &UserData) -> Result<()> {
        self.store
            .set(keys::USER_DATA, &serde_json::to_string(user)?)
            .await
    }

    async fn clear(&self) -> Result<()> {
        futures::try_join!(
            self.remove_secure(keys::SESSION_JWT),
            self.remove_secure(keys::SESSION_TOKEN)
        )?;
        futures::try_join!(
            self.store.remove(keys::USER_ID),
            self.store.remove(keys::USER_DATA),
            self.store.remove(keys::IS_AUTHENTICATED)
        )?;
        Ok(())
    }
}
