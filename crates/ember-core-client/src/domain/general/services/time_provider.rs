// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

#[cfg_attr(feature = "test", mockall::automock)]
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
