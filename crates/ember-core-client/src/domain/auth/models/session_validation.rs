// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::auth::models::UserData;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionValidation {
    /// The session is valid. `user` carries fresh user data if the provider returned any.
    Valid { user: Option<UserData> },
    Invalid,
}
