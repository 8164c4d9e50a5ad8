// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The navigation intent derived from a user status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatusAction {
    NavigateToQuestionnaire,
    NavigateToPaywall,
    NavigateToHome,
    /// Fallback for status codes without a configured action. Treated like
    /// `NavigateToHome`.
    PlaceholderCall,
}
