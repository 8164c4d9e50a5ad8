// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use tracing::{info, warn};

use ember_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthRepository, DynClientEventDispatcher, DynTrackingRecordsRepository,
    DynUserStatusRepository,
};
use crate::domain::auth::models::{AuthTokens, BootstrapAuthResult, UserData};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    auth_repo: DynAuthRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    tracking_records_repo: DynTrackingRecordsRepository,
    #[inject]
    user_status_repo: DynUserStatusRepository,
}

impl SessionService {
    /// Persists a freshly established session and makes it the current one.
    pub async fn store_session(&self, tokens: AuthTokens, user: UserData) -> Result<()> {
        self.auth_repo.store_tokens(&tokens).await?;
        self.auth_repo.store_user(&user).await?;

        info!("Stored session of user {}.", tokens.user_id);
        self.ctx
            .set_auth_result(BootstrapAuthResult::valid_session(tokens, Some(user)));
        Ok(())
    }

    /// Replaces the data of the signed-in user, e.g. after their status changed.
    pub async fn update_user(&self, user: UserData) -> Result<()> {
        let Some(current_user) = self.ctx.current_user() else {
            bail!("Cannot update user data since no user is signed in.");
        };

        if current_user.id != user.id {
            bail!(
                "Cannot replace user {} with user {}.",
                current_user.id,
                user.id
            );
        }

        self.auth_repo.store_user(&user).await?;
        self.ctx.set_current_user(user);
        Ok(())
    }

    pub fn current_user(&self) -> Option<UserData> {
        self.ctx.current_user()
    }

    pub fn is_signed_in(&self) -> bool {
        self.ctx.auth_tokens().is_some()
    }

    /// Removes the stored session and all cached data of the user.
    pub async fn sign_out(&self) -> Result<()> {
        info!("Signing out…");

        self.ctx.reset_auth_result();
        self.tracking_records_repo.clear_cache();
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::TrackingRecordsChanged);

        if let Err(err) = self.user_status_repo.reset().await {
            warn!("Failed to clear cached user statuses. {err:?}");
        }

        if let Err(err) = self.auth_repo.clear().await {
            warn!("Failed to clear stored session. {err:?}");
            return Err(err);
        }
        Ok(())
    }
}
