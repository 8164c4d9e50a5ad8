// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tracking_service::TrackingService;

mod tracking_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::tracking_service::MockTrackingService;
}
