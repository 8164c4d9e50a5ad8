// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use navigation_error::NavigationError;
pub use route::{AuthMode, PendingRoute, Route, RouteParams};
pub use startup_state::StartupState;

mod navigation_error;
mod route;
mod startup_state;
