// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::shared::models::RequestError;
use crate::domain::user_status::models::UserStatus;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserStatusService: Send + Sync {
    /// Loads the full list of statuses known to the backend.
    async fn load_user_statuses(&self) -> Result<Vec<UserStatus>, RequestError>;
}
