// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{
    ClientBuilder, UndefinedAuthService, UndefinedHttpTransport, UndefinedNavigationSurface,
    UndefinedStore,
};
use crate::services::{JournalService, SessionService, StartupService, UserStatusService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<
        UndefinedStore,
        UndefinedHttpTransport,
        UndefinedAuthService,
        UndefinedNavigationSurface,
    > {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub journal: JournalService,
    pub session: SessionService,
    pub startup: StartupService,
    pub user_status: UserStatusService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Bootstraps the stored session and navigates to the initial screen once the navigation
    /// container is ready.
    pub async fn start(&self) {
        self.startup.start().await
    }

    pub async fn set_navigation_ready(&self) {
        self.startup.set_navigation_ready().await
    }

    pub fn shutdown(&self) {
        self.startup.shutdown()
    }

    pub fn config(&self) -> &crate::AppConfig {
        &self.ctx.config
    }
}
