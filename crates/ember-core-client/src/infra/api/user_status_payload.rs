// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

use crate::domain::user_status::models::UserStatus;

#[derive(Deserialize, Debug)]
pub(super) struct UserStatusList {
    statuses: Vec<UserStatus>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(super) enum UserStatusesPayload {
    Envelope { data: UserStatusList },
    List(Vec<UserStatus>),
    Statuses(UserStatusList),
}

impl UserStatusesPayload {
    pub fn into_statuses(self) -> Vec<UserStatus> {
        match self {
            UserStatusesPayload::Envelope { data } => data.statuses,
            UserStatusesPayload::List(statuses) => statuses,
            UserStatusesPayload::Statuses(list) => list.statuses,
        }
    }
}
