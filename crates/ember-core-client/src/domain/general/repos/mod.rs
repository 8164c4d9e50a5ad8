// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use key_value_store::KeyValueStore;

mod key_value_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::key_value_store::MockKeyValueStore;
}
