// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::IDProvider;
pub use time_provider::TimeProvider;

mod id_provider;
mod time_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::id_provider::MockIDProvider;
    pub use super::time_provider::MockTimeProvider;
}
