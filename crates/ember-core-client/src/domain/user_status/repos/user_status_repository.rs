// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::user_status::models::{UserStatus, UserStatusAction, UserStatusId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserStatusRepository: Send + Sync {
    /// Loads the status map unless it is already loaded. With `force_refresh` the map is
    /// always fetched from the backend. Errors while fetching are returned to the caller.
    async fn initialize(&self, force_refresh: bool) -> Result<()>;

    /// Equivalent to `initialize(true)`.
    async fn refresh(&self) -> Result<()>;

    /// Forgets the in-memory map and removes the persisted copy.
    async fn reset(&self) -> Result<()>;

    fn is_initialized(&self) -> bool;

    /// Returns `None` if the id is unknown or the map has not been initialized yet.
    fn get_status(&self, id: &UserStatusId) -> Option<UserStatus>;

    /// Returns `None` if the id is unknown or the map has not been initialized yet.
    fn get_status_action(&self, id: &UserStatusId) -> Option<UserStatusAction>;
}
