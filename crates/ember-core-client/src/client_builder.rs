// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAuthService, DynHttpTransport, DynIDProvider,
    DynKeyValueStore, DynNavigationSurface, DynTimeProvider,
};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::app::services::{JournalService, SessionService, StartupService, UserStatusService};
use crate::client::ClientInner;
use crate::domain::auth::services::AuthService;
use crate::domain::general::repos::KeyValueStore;
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::domain::navigation::services::NavigationSurface;
use crate::domain::user_status::services::StatusActionResolver;
use crate::infra::api::HttpTransport;
use crate::infra::general::{SystemTimeProvider, UUIDProvider};
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;
pub struct UndefinedHttpTransport;
pub struct UndefinedAuthService;
pub struct UndefinedNavigationSurface;

pub struct ClientBuilder<S, T, A, N> {
    app_config: AppConfig,
    auth_service: A,
    delegate: Option<Box<dyn ClientDelegate>>,
    http_transport: T,
    id_provider: DynIDProvider,
    navigation_surface: N,
    secure_store: Option<DynKeyValueStore>,
    status_action_resolver: StatusActionResolver,
    store: S,
    time_provider: DynTimeProvider,
}

impl
    ClientBuilder<
        UndefinedStore,
        UndefinedHttpTransport,
        UndefinedAuthService,
        UndefinedNavigationSurface,
    >
{
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            auth_service: UndefinedAuthService,
            delegate: None,
            http_transport: UndefinedHttpTransport,
            id_provider: Arc::new(UUIDProvider::default()),
            navigation_surface: UndefinedNavigationSurface,
            secure_store: None,
            status_action_resolver: Default::default(),
            store: UndefinedStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<T, A, N> ClientBuilder<UndefinedStore, T, A, N> {
    pub fn set_store<S: KeyValueStore + 'static>(
        self,
        store: S,
    ) -> ClientBuilder<DynKeyValueStore, T, A, N> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: self.auth_service,
            delegate: self.delegate,
            http_transport: self.http_transport,
            id_provider: self.id_provider,
            navigation_surface: self.navigation_surface,
            secure_store: self.secure_store,
            status_action_resolver: self.status_action_resolver,
            store: Arc::new(store),
            time_provider: self.time_provider,
        }
    }
}

impl<S, A, N> ClientBuilder<S, UndefinedHttpTransport, A, N> {
    pub fn set_http_transport<T: HttpTransport + 'static>(
        self,
        http_transport: T,
    ) -> ClientBuilder<S, DynHttpTransport, A, N> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: self.auth_service,
            delegate: self.delegate,
            http_transport: Arc::new(http_transport),
            id_provider: self.id_provider,
            navigation_surface: self.navigation_surface,
            secure_store: self.secure_store,
            status_action_resolver: self.status_action_resolver,
            store: self.store,
            time_provider: self.time_provider,
        }
    }
}

impl<S, T, N> ClientBuilder<S, T, UndefinedAuthService, N> {
    pub fn set_auth_service<A: AuthService + 'static>(
        self,
        auth_service: A,
    ) -> ClientBuilder<S, T, DynAuthService, N> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: Arc::new(auth_service),
            delegate: self.delegate,
            http_transport: self.http_transport,
            id_provider: self.id_provider,
            navigation_surface: self.navigation_surface,
            secure_store: self.secure_store,
            status_action_resolver: self.status_action_resolver,
            store: self.store,
            time_provider: self.time_provider,
        }
    }
}

impl<S, T, A> ClientBuilder<S, T, A, UndefinedNavigationSurface> {
    pub fn set_navigation_surface<N: NavigationSurface + 'static>(
        self,
        navigation_surface: N,
    ) -> ClientBuilder<S, T, A, DynNavigationSurface> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: self.auth_service,
            delegate: self.delegate,
            http_transport: self.http_transport,
            id_provider: self.id_provider,
            navigation_surface: Arc::new(navigation_surface),
            secure_store: self.secure_store,
            status_action_resolver: self.status_action_resolver,
            store: self.store,
            time_provider: self.time_provider,
        }
    }
}

impl<S, T, A, N> ClientBuilder<S, T, A, N> {
    /// Sets the store for the session credentials. Without one, credentials are kept in the
    /// regular store.
    pub fn set_secure_store<K: KeyValueStore + 'static>(mut self, secure_store: K) -> Self {
        self.secure_store = Some(Arc::new(secure_store));
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<P: TimeProvider + 'static>(mut self, time_provider: P) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_status_action_resolver(mut self, resolver: StatusActionResolver) -> Self {
        self.status_action_resolver = resolver;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynKeyValueStore, DynHttpTransport, DynAuthService, DynNavigationSurface> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let dependencies: AppDependencies = PlatformDependencies {
            auth_service: self.auth_service,
            client_event_dispatcher: event_dispatcher.clone(),
            ctx: Arc::new(AppContext::new(self.app_config)),
            http_transport: self.http_transport,
            id_provider: self.id_provider,
            navigation_surface: self.navigation_surface,
            secure_store: self.secure_store.unwrap_or_else(|| self.store.clone()),
            status_action_resolver: self.status_action_resolver,
            store: self.store,
            time_provider: self.time_provider,
        }
        .into();

        let client_inner = Arc::new(ClientInner {
            journal: JournalService::from(&dependencies),
            session: SessionService::from(&dependencies),
            startup: StartupService::from(&dependencies),
            user_status: UserStatusService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
