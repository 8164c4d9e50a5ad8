// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynAuthService, DynClientEventDispatcher, DynHttpTransport,
    DynIDProvider, DynKeyValueStore, DynNavigationSurface, DynTimeProvider,
};
use crate::domain::auth::services::impls::{AuthBootstrapper, AuthBootstrapperDependencies};
use crate::domain::user_status::services::StatusActionResolver;
use crate::infra::api::{ApiClient, RestTrackingService, RestUserStatusService};
use crate::infra::auth::StoredAuthRepository;
use crate::infra::tracking::InMemoryTrackingRecordsRepository;
use crate::infra::user_status::{CachingUserStatusRepository, UserStatusCache};

/// The collaborators provided by the host platform.
pub struct PlatformDependencies {
    pub auth_service: DynAuthService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub http_transport: DynHttpTransport,
    pub id_provider: DynIDProvider,
    pub navigation_surface: DynNavigationSurface,
    /// Holds the session credentials. Falls back to `store` if unavailable.
    pub secure_store: DynKeyValueStore,
    pub status_action_resolver: StatusActionResolver,
    pub store: DynKeyValueStore,
    pub time_provider: DynTimeProvider,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let api = ApiClient::new(d.ctx.clone(), d.http_transport);

        let auth_repo = Arc::new(StoredAuthRepository::new(d.secure_store, d.store.clone()));

        let user_status_repo = Arc::new(CachingUserStatusRepository::new(
            UserStatusCache::new(d.store),
            Arc::new(RestUserStatusService::new(api.clone())),
            d.status_action_resolver,
            d.ctx.config.revalidate_cached_statuses,
        ));

        let auth_bootstrapper = Arc::new(AuthBootstrapper::from(AuthBootstrapperDependencies {
            auth_repo: auth_repo.clone(),
            auth_service: d.auth_service,
        }));

        Self {
            auth_bootstrapper,
            auth_repo,
            client_event_dispatcher: d.client_event_dispatcher,
            ctx: d.ctx,
            id_provider: d.id_provider,
            navigation_surface: d.navigation_surface,
            time_provider: d.time_provider,
            tracking_records_repo: Arc::new(InMemoryTrackingRecordsRepository::new()),
            tracking_service: Arc::new(RestTrackingService::new(api)),
            user_status_repo,
        }
    }
}
