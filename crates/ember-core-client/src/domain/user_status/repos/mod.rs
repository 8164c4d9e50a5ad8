// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_status_repository::UserStatusRepository;

mod user_status_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::user_status_repository::MockUserStatusRepository;
}
