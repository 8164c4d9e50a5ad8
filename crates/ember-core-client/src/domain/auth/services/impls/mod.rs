// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_bootstrapper::{AuthBootstrapper, AuthBootstrapperDependencies};

mod auth_bootstrapper;
