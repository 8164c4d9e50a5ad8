// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use stored_auth_repository::StoredAuthRepository;

mod stored_auth_repository;
