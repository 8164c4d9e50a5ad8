// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::dtos;
pub use app::services;
pub use client::{Client, ClientDelegate};
pub use client_builder::ClientBuilder;
pub use client_event::{ClientEvent, Toast, ToastKind};
pub use domain::auth::services::AuthService;
pub use domain::general::repos::KeyValueStore;
pub use domain::general::services::{IDProvider, TimeProvider};
pub use domain::navigation::services::NavigationSurface;
pub use infra::api::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use infra::general::InMemoryKeyValueStore;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
