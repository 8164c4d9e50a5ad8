// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use status_action_resolver::StatusActionResolver;
pub use user_status_service::UserStatusService;

mod status_action_resolver;
mod user_status_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::user_status_service::MockUserStatusService;
}
