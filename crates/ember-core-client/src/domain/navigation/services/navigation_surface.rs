// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::navigation::models::{NavigationError, PendingRoute};

/// The navigation container of the host application.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NavigationSurface: Send + Sync {
    /// Returns true once the container is mounted and can accept navigation commands.
    fn is_ready(&self) -> bool;

    /// Replaces the navigation stack with `route`.
    fn reset(&self, route: &PendingRoute) -> Result<(), NavigationError>;

    /// Pushes `route` onto the navigation stack.
    fn navigate(&self, route: &PendingRoute) -> Result<(), NavigationError>;
}
