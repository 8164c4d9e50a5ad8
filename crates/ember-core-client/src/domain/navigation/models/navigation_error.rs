// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("The navigation container is not ready yet.")]
    NotReady,
    #[error("Navigation to {route} failed: {msg}")]
    Rejected { route: String, msg: String },
}
