// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use navigation_surface::NavigationSurface;
pub use startup_route_resolver::{determine_startup_route, route_for_status_action};

mod navigation_surface;
mod startup_route_resolver;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::navigation_surface::MockNavigationSurface;
}
