// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use url::Url;

use crate::domain::auth::models::{AuthTokens, BootstrapAuthResult, UserData};
use crate::domain::shared::models::BackendUserId;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub struct AppConfig {
    /// The delay between two attempts to hand the initial route to the navigation container.
    pub navigation_retry_delay: Duration,
    /// The number of tracking records the backend returns per page.
    pub tracking_records_page_size: usize,
    /// Whether cached user statuses are refreshed in the background after startup.
    pub revalidate_cached_statuses: bool,
    pub api_base_url: Url,
}

#[derive(Default)]
pub struct AppContext {
    pub config: AppConfig,
    auth_result: RwLock<Option<BootstrapAuthResult>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            auth_result: Default::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigation_retry_delay: Duration::from_millis(100),
            tracking_records_page_size: 10,
            revalidate_cached_statuses: true,
            api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .expect("The default API base URL is valid"),
        }
    }
}

impl AppContext {
    pub fn auth_result(&self) -> Option<BootstrapAuthResult> {
        self.auth_result.read().clone()
    }

    /// Returns the tokens of the current session if the session is valid.
    pub fn auth_tokens(&self) -> Option<AuthTokens> {
        self.auth_result
            .read()
            .as_ref()
            .filter(|result| result.is_session_valid)
            .and_then(|result| result.tokens.clone())
    }

    pub fn current_user(&self) -> Option<UserData> {
        self.auth_result
            .read()
            .as_ref()
            .and_then(|result| result.user.clone())
    }

    pub fn current_backend_user_id(&self) -> Result<BackendUserId> {
        self.current_user()
            .and_then(|user| user.backend_user_id)
            .ok_or(anyhow!(
                "Failed to read the backend id of the user since no user is signed in."
            ))
    }
}

impl AppContext {
    pub fn set_auth_result(&self, result: BootstrapAuthResult) {
        self.auth_result.write().replace(result);
    }

    pub fn set_current_user(&self, user: UserData) {
        if let Some(result) = self.auth_result.write().as_mut() {
            result.user = Some(user);
        }
    }

    pub fn reset_auth_result(&self) {
        self.auth_result.write().take();
    }
}
