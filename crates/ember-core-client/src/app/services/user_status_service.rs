// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use tracing::info;

use ember_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynNavigationSurface, DynUserStatusRepository};
use crate::domain::navigation::models::{PendingRoute, Route};
use crate::domain::navigation::services::route_for_status_action;
use crate::domain::user_status::models::{UserStatus, UserStatusAction, UserStatusId};

#[derive(InjectDependencies)]
pub struct UserStatusService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    navigation_surface: DynNavigationSurface,
    #[inject]
    user_status_repo: DynUserStatusRepository,
}

impl UserStatusService {
    /// Loads the status map unless it has been loaded already.
    pub async fn initialize(&self, force_refresh: bool) -> Result<()> {
        self.user_status_repo.initialize(force_refresh).await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.user_status_repo.refresh().await
    }

    /// Drops the status map and its cached copy.
    pub async fn reset(&self) -> Result<()> {
        self.user_status_repo.reset().await
    }

    pub fn is_initialized(&self) -> bool {
        self.user_status_repo.is_initialized()
    }

    pub fn get_status(&self, id: &UserStatusId) -> Option<UserStatus> {
        self.user_status_repo.get_status(id)
    }

    pub fn get_status_action(&self, id: &UserStatusId) -> Option<UserStatusAction> {
        self.user_status_repo.get_status_action(id)
    }

    /// Returns the status of the signed-in user.
    pub fn current_status(&self) -> Option<UserStatus> {
        let status_id = self.ctx.current_user()?.user_status_id?;
        self.user_status_repo.get_status(&status_id)
    }

    pub fn route_for_status(&self, id: &UserStatusId) -> Option<Route> {
        self.get_status_action(id).map(route_for_status_action)
    }

    /// Navigates to the screen that belongs to the status `id`.
    pub fn navigate_for_status(&self, id: &UserStatusId) -> Result<Route> {
        let route = self
            .route_for_status(id)
            .ok_or(anyhow!("No action is known for user status {id}."))?;

        info!("Navigating to {route} for user status {id}.");
        self.navigation_surface.navigate(&PendingRoute::new(route))?;
        Ok(route)
    }
}
