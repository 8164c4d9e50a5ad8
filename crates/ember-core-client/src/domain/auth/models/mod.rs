// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_tokens::AuthTokens;
pub use bootstrap_auth_result::BootstrapAuthResult;
pub use session_validation::SessionValidation;
pub use user_data::UserData;

mod auth_tokens;
mod bootstrap_auth_result;
mod session_validation;
mod user_data;
