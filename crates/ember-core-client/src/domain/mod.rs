// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod auth;
pub mod general;
pub mod navigation;
pub mod shared;
pub mod tracking;
pub mod user_status;
