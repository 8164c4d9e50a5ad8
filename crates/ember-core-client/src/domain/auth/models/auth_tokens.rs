// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use secrecy::{ExposeSecret, Secret};

use crate::domain::shared::models::UserId;

/// The credentials of a logged-in user.
pub struct AuthTokens {
    pub session_jwt: Secret<String>,
    pub session_token: Secret<String>,
    pub user_id: UserId,
}

impl AuthTokens {
    pub fn new(
        session_jwt: impl Into<String>,
        session_token: impl Into<String>,
        user_id: impl Into<UserId>,
    ) -> Self {
        Self {
            session_jwt: Secret::new(session_jwt.into()),
            session_token: Secret::new(session_token.into()),
            user_id: user_id.into(),
        }
    }
}

impl Clone for AuthTokens {
    fn clone(&self) -> Self {
        Self {
            session_jwt: Secret::new(self.session_jwt.expose_secret().clone()),
            session_token: Secret::new(self.session_token.expose_secret().clone()),
            user_id: self.user_id.clone(),
        }
    }
}

impl PartialEq for AuthTokens {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.session_jwt.expose_secret() == other.session_jwt.expose_secret()
            && self.session_token.expose_secret() == other.session_token.expose_secret()
    }
}

impl Debug for AuthTokens {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("session_jwt", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}
