// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::auth::models::{AuthTokens, UserData};

/// The outcome of reading the stored credentials and validating them with the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapAuthResult {
    pub is_authenticated: bool,
    pub is_session_valid: bool,
    pub tokens: Option<AuthTokens>,
    pub user: Option<UserData>,
}

impl BootstrapAuthResult {
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            is_session_valid: false,
            tokens: None,
            user: None,
        }
    }

    pub fn invalid_session(tokens: AuthTokens, user: Option<UserData>) -> Self {
        Self {
            is_authenticated: true,
            is_session_valid: false,
            tokens: Some(tokens),
            user,
        }
    }

    pub fn valid_session(tokens: AuthTokens, user: Option<UserData>) -> Self {
        Self {
            is_authenticated: true,
            is_session_valid: true,
            tokens: Some(tokens),
            user,
        }
    }
}
