// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_repository::AuthRepository;

mod auth_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::auth_repository::MockAuthRepository;
}
