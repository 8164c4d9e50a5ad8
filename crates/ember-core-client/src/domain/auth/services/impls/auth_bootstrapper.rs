// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use ember_proc_macros::DependenciesStruct;

use crate::app::deps::{DynAuthRepository, DynAuthService};
use crate::domain::auth::models::{BootstrapAuthResult, SessionValidation};
use crate::domain::auth::services::AuthBootstrapper as AuthBootstrapperTrait;

#[derive(DependenciesStruct)]
pub struct AuthBootstrapper {
    auth_repo: DynAuthRepository,
    auth_service: DynAuthService,
}

#[async_trait]
impl AuthBootstrapperTrait for AuthBootstrapper {
    async fn bootstrap(&self) -> Result<BootstrapAuthResult> {
        let (tokens, stored_user) =
            futures::try_join!(self.auth_repo.load_tokens(), self.auth_repo.load_user())?;

        let Some(tokens) = tokens else {
            info!("No stored session found.");
            return Ok(BootstrapAuthResult::unauthenticated());
        };

        match self.auth_service.validate_session(&tokens).await {
            Ok(SessionValidation::Valid { user }) => {
                info!("Stored session of {} is valid.", tokens.user_id);
                Ok(BootstrapAuthResult::valid_session(
                    tokens,
                    user.or(stored_user),
                ))
            }
            Ok(SessionValidation::Invalid) => {
                warn!("Stored session of {} was rejected.", tokens.user_id);
                Ok(BootstrapAuthResult::invalid_session(tokens, stored_user))
            }
            Err(err) if err.is_unauthorized() => {
                warn!(
                    "Stored session of {} was rejected by the auth provider. {err}",
                    tokens.user_id
                );
                Ok(BootstrapAuthResult::invalid_session(tokens, stored_user))
            }
            Err(err) => Err(err.into()),
        }
    }
}
