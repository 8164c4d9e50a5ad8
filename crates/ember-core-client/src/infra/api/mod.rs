// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use api_client::ApiClient;
pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use rest_tracking_service::RestTrackingService;
pub use rest_user_status_service::RestUserStatusService;

mod api_client;
mod http_transport;
mod rest_tracking_service;
mod rest_user_status_service;
mod tracking_payload;
mod user_status_payload;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::http_transport::MockHttpTransport;
}
