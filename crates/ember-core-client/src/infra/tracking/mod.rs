// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_tracking_records_repository::InMemoryTrackingRecordsRepository;

mod in_memory_tracking_records_repository;
