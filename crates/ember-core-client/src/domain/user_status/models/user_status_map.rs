// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::user_status::models::{UserStatus, UserStatusAction, UserStatusId};
use crate::domain::user_status::services::StatusActionResolver;

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatusEntry {
    pub status: UserStatus,
    pub action: UserStatusAction,
}

/// Statuses keyed by their id, each paired with the action it resolves to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserStatusMap {
    entries: HashMap<UserStatusId, UserStatusEntry>,
}

impl UserStatusMap {
    pub fn build(statuses: &[UserStatus], resolver: &StatusActionResolver) -> Self {
        let entries = statuses
            .iter()
            .map(|status| {
                let entry = UserStatusEntry {
                    status: status.clone(),
                    action: resolver.resolve(status),
                };
                (status.id, entry)
            })
            .collect();

        Self { entries }
    }

    pub fn get_status(&self, id: &UserStatusId) -> Option<&UserStatus> {
        self.entries.get(id).map(|entry| &entry.status)
    }

    pub fn get_action(&self, id: &UserStatusId) -> Option<UserStatusAction> {
        self.entries.get(id).map(|entry| entry.action)
    }

    /// Returns the statuses ordered by id.
    pub fn statuses(&self) -> Vec<UserStatus> {
        let mut statuses = self
            .entries
            .values()
            .map(|entry| entry.status.clone())
            .collect::<Vec<_>>();
        statuses.sort_by_key(|status| status.id);
        statuses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
