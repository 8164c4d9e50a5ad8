// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::auth::repos::AuthRepository;
use crate::domain::auth::services::{AuthBootstrapper, AuthService};
use crate::domain::general::repos::KeyValueStore;
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::domain::navigation::services::NavigationSurface;
use crate::domain::tracking::repos::TrackingRecordsRepository;
use crate::domain::tracking::services::TrackingService;
use crate::domain::user_status::repos::UserStatusRepository;
use crate::domain::user_status::services::UserStatusService;
use crate::infra::api::HttpTransport;

pub type DynAppContext = Arc<AppContext>;
pub type DynAuthBootstrapper = Arc<dyn AuthBootstrapper>;
pub type DynAuthRepository = Arc<dyn AuthRepository>;
pub type DynAuthService = Arc<dyn AuthService>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynHttpTransport = Arc<dyn HttpTransport>;
pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynKeyValueStore = Arc<dyn KeyValueStore>;
pub type DynNavigationSurface = Arc<dyn NavigationSurface>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynTrackingRecordsRepository = Arc<dyn TrackingRecordsRepository>;
pub type DynTrackingService = Arc<dyn TrackingService>;
pub type DynUserStatusRepository = Arc<dyn UserStatusRepository>;
pub type DynUserStatusService = Arc<dyn UserStatusService>;

pub struct AppDependencies {
    pub auth_bootstrapper: DynAuthBootstrapper,
    pub auth_repo: DynAuthRepository,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub navigation_surface: DynNavigationSurface,
    pub time_provider: DynTimeProvider,
    pub tracking_records_repo: DynTrackingRecordsRepository,
    pub tracking_service: DynTrackingService,
    pub user_status_repo: DynUserStatusRepository,
}
