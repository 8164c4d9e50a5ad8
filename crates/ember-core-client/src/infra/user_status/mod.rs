// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use caching_user_status_repository::CachingUserStatusRepository;
pub use user_status_cache::UserStatusCache;

mod caching_user_status_repository;
mod user_status_cache;
