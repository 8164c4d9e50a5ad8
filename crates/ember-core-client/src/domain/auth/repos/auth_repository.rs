// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::auth::models::{AuthTokens, UserData};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthRepository: Send + Sync {
    /// Returns the stored tokens. Tokens are only returned if the JWT, the session token and
    /// the user id are all present.
    async fn load_tokens(&self) -> Result<Option<AuthTokens>>;
    async fn load_user(&self) -> Result<Option<UserData>>;

    async fn store_tokens(&self, tokens: &AuthTokens) -> Result<()>;
    async fn store_user(&self, user: &UserData) -> Result<()>;

    /// Removes tokens and user data.
    async fn clear(&self) -> Result<()>;
}
