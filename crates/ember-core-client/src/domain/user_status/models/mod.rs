// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_status::{UserStatus, UserStatusId};
pub use user_status_action::UserStatusAction;
pub use user_status_map::{UserStatusEntry, UserStatusMap};

mod user_status;
mod user_status_action;
mod user_status_map;
