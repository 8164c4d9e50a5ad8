// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use anyhow::{bail, Result};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use ember_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynAuthBootstrapper, DynAuthRepository, DynClientEventDispatcher,
    DynNavigationSurface, DynUserStatusRepository,
};
use crate::domain::navigation::models::{NavigationError, PendingRoute, Route, StartupState};
use crate::domain::navigation::services::determine_startup_route;
use crate::domain::shared::models::RequestErrorExt;
use crate::ClientEvent;

/// Drives the app from launch to its first screen.
///
/// `start` bootstraps the stored session and determines the initial route. The route is
/// handed to the navigation container once it reported to be ready via `set_navigation_ready`.
/// If the container rejects the route, handing it over is retried until it succeeds or the
/// service is shut down.
#[derive(InjectDependencies)]
pub struct StartupService {
    #[inject]
    auth_bootstrapper: DynAuthBootstrapper,
    #[inject]
    auth_repo: DynAuthRepository,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    navigation_surface: DynNavigationSurface,
    #[inject]
    user_status_repo: DynUserStatusRepository,

    state: RwLock<StartupState>,
    pending_route: RwLock<Option<PendingRoute>>,
    bootstrap_started: AtomicBool,
    navigation_ready: AtomicBool,
    has_navigated: AtomicBool,
    is_committing: AtomicBool,
    is_shut_down: AtomicBool,
    navigation_attempts: AtomicU32,
}

impl StartupService {
    /// Runs the startup sequence. Subsequent calls are ignored.
    pub async fn start(&self) {
        if self.bootstrap_started.swap(true, Ordering::SeqCst) {
            debug!("Ignoring repeated request to start.");
            return;
        }

        self.set_state(StartupState::Bootstrapping);

        let route = match self.determine_route().await {
            Ok(route) => route,
            Err(err) => {
                if let Some(network_error) = err.network_error() {
                    warn!("Startup failed due to a network error. {err:?}");
                    self.set_state(StartupState::NetworkError {
                        message: network_error.user_message(),
                    });
                    return;
                }

                error!("Startup failed. Falling back to authentication. {err:?}");
                PendingRoute::new(Route::Auth)
            }
        };

        info!("Determined initial route {:?}.", route);
        self.pending_route.write().replace(route);
        self.set_state(StartupState::AwaitingNavTarget);

        self.commit_pending_route().await;
    }

    /// Tells the service that the navigation container is mounted.
    pub async fn set_navigation_ready(&self) {
        self.navigation_ready.store(true, Ordering::SeqCst);
        self.commit_pending_route().await;
    }

    /// Restarts the startup sequence after it failed due to a network error.
    pub async fn retry_startup(&self) -> Result<()> {
        if !matches!(*self.state.read(), StartupState::NetworkError { .. }) {
            bail!("Startup can only be retried after a network error.");
        }

        info!("Retrying startup…");
        self.pending_route.write().take();
        self.has_navigated.store(false, Ordering::SeqCst);
        self.navigation_attempts.store(0, Ordering::SeqCst);
        self.bootstrap_started.store(false, Ordering::SeqCst);
        self.set_state(StartupState::Idle);

        self.start().await;
        Ok(())
    }

    /// Records that a screen navigated on its own. Returns true if this call performed the
    /// transition.
    pub fn mark_navigated(&self) -> bool {
        if self.has_navigated.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.set_state(StartupState::Committed);
        true
    }

    /// Stops a pending retry loop.
    pub fn shutdown(&self) {
        self.is_shut_down.store(true, Ordering::SeqCst);
    }

    pub fn state(&self) -> StartupState {
        self.state.read().clone()
    }

    pub fn is_initializing(&self) -> bool {
        self.state.read().is_initializing()
    }

    pub fn pending_route(&self) -> Option<PendingRoute> {
        *self.pending_route.read()
    }

    pub fn has_navigated(&self) -> bool {
        self.has_navigated.load(Ordering::SeqCst)
    }

    pub fn navigation_attempts(&self) -> u32 {
        self.navigation_attempts.load(Ordering::SeqCst)
    }
}

impl StartupService {
    async fn determine_route(&self) -> Result<PendingRoute> {
        let result = self.auth_bootstrapper.bootstrap().await?;
        self.ctx.set_auth_result(result.clone());

        if result.is_authenticated && !result.is_session_valid {
            info!("Clearing rejected session.");
            if let Err(err) = self.auth_repo.clear().await {
                warn!("Failed to clear rejected session. {err:?}");
            }
        }

        if result.is_session_valid {
            if let Some(user) = &result.user {
                if let Err(err) = self.auth_repo.store_user(user).await {
                    warn!("Failed to store user data. {err:?}");
                }
                if user.user_status_id.is_some() {
                    self.user_status_repo.initialize(false).await?;
                }
            }
        }

        Ok(determine_startup_route(&result, |id| {
            self.user_status_repo.get_status_action(id)
        }))
    }

    async fn commit_pending_route(&self) {
        loop {
            if !self.navigation_ready.load(Ordering::SeqCst) || self.has_navigated() {
                return;
            }

            if self.is_committing.swap(true, Ordering::SeqCst) {
                return;
            }

            while !self.is_shut_down.load(Ordering::SeqCst) && !self.has_navigated() {
                let Some(route) = self.pending_route() else {
                    break;
                };

                match self.try_commit(&route) {
                    Ok(()) => {
                        if !self.has_navigated.swap(true, Ordering::SeqCst) {
                            info!("Navigated to initial route {:?}.", route);
                            self.set_state(StartupState::Committed);
                        }
                        break;
                    }
                    Err(err) => {
                        let attempt = self.navigation_attempts.fetch_add(1, Ordering::SeqCst) + 1;
                        debug!("Navigation attempt {attempt} failed. {err}");
                        tokio::time::sleep(self.ctx.config.navigation_retry_delay).await;
                    }
                }
            }

            self.is_committing.store(false, Ordering::SeqCst);

            // Pick up a route that was stored while the loop was exiting.
            if self.is_shut_down.load(Ordering::SeqCst) || self.pending_route().is_none() {
                return;
            }
        }
    }

    fn try_commit(&self, route: &PendingRoute) -> Result<(), NavigationError> {
        if !self.navigation_surface.is_ready() {
            return Err(NavigationError::NotReady);
        }
        self.navigation_surface.reset(route)
    }

    fn set_state(&self, state: StartupState) {
        {
            let mut current_state = self.state.write();
            if *current_state == state {
                return;
            }
            *current_state = state.clone();
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::StartupStateChanged { state });
    }
}
