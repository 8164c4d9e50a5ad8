// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use ember_utils::id_int;
use serde::{Deserialize, Serialize};

id_int!(UserStatusId);

/// A server-defined status that classifies where the user stands in onboarding and
/// subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    pub id: UserStatusId,
    pub code: String,
}

impl UserStatus {
    pub const ONBOARDING_INCOMPLETE: &'static str = "onboarding_incomplete";
    pub const ONBOARDING_COMPLETE: &'static str = "onboarding_complete";
    pub const ONBOARDED_COMPLETE: &'static str = "onboarded_complete";
    pub const SUBSCRIBED: &'static str = "subscribed";

    pub fn new(id: i64, code: impl Into<String>) -> Self {
        Self {
            id: UserStatusId::new(id),
            code: code.into(),
        }
    }
}
