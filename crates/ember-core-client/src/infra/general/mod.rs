// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use system_time_provider::SystemTimeProvider;
pub use uuid_provider::UUIDProvider;

mod in_memory_key_value_store;
mod system_time_provider;
mod uuid_provider;
