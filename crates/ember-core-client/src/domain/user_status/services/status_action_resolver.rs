// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::user_status::models::{UserStatus, UserStatusAction};

/// Maps status codes to navigation actions. Codes without a mapping resolve to
/// `UserStatusAction::PlaceholderCall`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusActionResolver {
    mappings: HashMap<String, UserStatusAction>,
}

impl StatusActionResolver {
    pub fn empty() -> Self {
        Self {
            mappings: Default::default(),
        }
    }

    pub fn resolve(&self, status: &UserStatus) -> UserStatusAction {
        self.mappings
            .get(&status.code)
            .copied()
            .unwrap_or(UserStatusAction::PlaceholderCall)
    }

    pub fn add_mapping(&mut self, code: impl Into<String>, action: UserStatusAction) {
        self.mappings.insert(code.into(), action);
    }

    pub fn with_mapping(mut self, code: impl Into<String>, action: UserStatusAction) -> Self {
        self.add_mapping(code, action);
        self
    }

    pub fn mappings(&self) -> &HashMap<String, UserStatusAction> {
        &self.mappings
    }
}

impl Default for StatusActionResolver {
    fn default() -> Self {
        Self::empty()
            .with_mapping(
                UserStatus::ONBOARDING_INCOMPLETE,
                UserStatusAction::NavigateToQuestionnaire,
            )
            .with_mapping(
                UserStatus::ONBOARDING_COMPLETE,
                UserStatusAction::NavigateToPaywall,
            )
            .with_mapping(
                UserStatus::ONBOARDED_COMPLETE,
                UserStatusAction::NavigateToHome,
            )
            .with_mapping(UserStatus::SUBSCRIBED, UserStatusAction::NavigateToHome)
    }
}
