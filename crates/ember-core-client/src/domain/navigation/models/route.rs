// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Route {
    Auth,
    Questionnaire,
    Paywall,
    Home,
    /// Shown while the startup sequence is running. Never a navigation target.
    StartupLoading,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Signup,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteParams {
    Auth { mode: AuthMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRoute {
    pub route: Route,
    pub params: Option<RouteParams>,
}

impl PendingRoute {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            params: None,
        }
    }

    pub fn auth(mode: AuthMode) -> Self {
        Self {
            route: Route::Auth,
            params: Some(RouteParams::Auth { mode }),
        }
    }
}

impl From<Route> for PendingRoute {
    fn from(route: Route) -> Self {
        Self::new(route)
    }
}
