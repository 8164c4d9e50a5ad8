// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::auth::models::BootstrapAuthResult;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthBootstrapper: Send + Sync {
    /// Reads the stored credentials and validates them with the auth provider. Stored tokens
    /// are never modified.
    async fn bootstrap(&self) -> Result<BootstrapAuthResult>;
}
