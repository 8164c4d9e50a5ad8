// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_bootstrapper::AuthBootstrapper;
pub use auth_service::AuthService;

mod auth_bootstrapper;
mod auth_service;
pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::auth_bootstrapper::MockAuthBootstrapper;
    pub use super::auth_service::MockAuthService;
}
