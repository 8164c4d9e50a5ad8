// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::auth::models::{AuthTokens, SessionValidation};
use crate::domain::shared::models::RequestError;

/// The remote identity provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthService: Send + Sync {
    /// Asks the provider whether the session described by `tokens` is still alive. A
    /// rejected session may be reported either as `SessionValidation::Invalid` or as a
    /// `RequestError::Api` with status 401 or 403.
    async fn validate_session(
        &self,
        tokens: &AuthTokens,
    ) -> Result<SessionValidation, RequestError>;
}
