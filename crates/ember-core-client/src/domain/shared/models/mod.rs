// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use request_error::{RequestError, RequestErrorExt};
pub use user_id::{BackendUserId, UserId};

mod request_error;
mod user_id;
