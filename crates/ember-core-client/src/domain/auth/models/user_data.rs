// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{BackendUserId, UserId};
use crate::domain::user_status::models::UserStatusId;

/// Profile data of the logged-in user as persisted on the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_user_id: Option<BackendUserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status_id: Option<UserStatusId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
