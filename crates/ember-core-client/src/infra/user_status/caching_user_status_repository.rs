// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::app::deps::DynUserStatusService;
use crate::domain::user_status::models::{
    UserStatus, UserStatusAction, UserStatusId, UserStatusMap,
};
use crate::domain::user_status::repos::UserStatusRepository;
use crate::domain::user_status::services::StatusActionResolver;
use crate::infra::user_status::UserStatusCache;

/// Keeps the status map in memory, backed by a persisted copy that is served first and
/// revalidated in the background.
pub struct CachingUserStatusRepository {
    inner: Arc<RepositoryInner>,
}

struct RepositoryInner {
    cache: UserStatusCache,
    resolver: StatusActionResolver,
    revalidate_cached_statuses: bool,
    service: DynUserStatusService,
    status_map: RwLock<Option<UserStatusMap>>,
    initialize_lock: tokio::sync::Mutex<()>,
    /// Bumped by every reset and forced refresh. A background revalidation started under
    /// an older generation discards its result.
    generation: AtomicU64,
}

impl CachingUserStatusRepository {
    pub fn new(
        cache: UserStatusCache,
        service: DynUserStatusService,
        resolver: StatusActionResolver,
        revalidate_cached_statuses: bool,
    ) -> Self {
        Self {
            inner: Arc::new(RepositoryInner {
                cache,
                resolver,
                revalidate_cached_statuses,
                service,
                status_map: Default::default(),
                initialize_lock: Default::default(),
                generation: Default::default(),
            }),
        }
    }
}

#[async_trait]
impl UserStatusRepository for CachingUserStatusRepository {
    async fn initialize(&self, force_refresh: bool) -> Result<()> {
        let inner = &self.inner;
        let _guard = inner.initialize_lock.lock().await;

        if force_refresh {
            inner.generation.fetch_add(1, Ordering::SeqCst);
        } else {
            if self.is_initialized() {
                return Ok(());
            }

            if let Some(statuses) = inner.cache.load().await {
                info!("Using {} cached user statuses.", statuses.len());
                inner.apply(&statuses);

                if inner.revalidate_cached_statuses {
                    self.revalidate_in_background();
                }
                return Ok(());
            }
        }

        let statuses = inner.load_statuses().await?;
        inner.apply(&statuses);
        inner.persist(&statuses).await;
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        self.initialize(true).await
    }

    async fn reset(&self) -> Result<()> {
        let _guard = self.inner.initialize_lock.lock().await;
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.status_map.write().take();
        self.inner.cache.clear().await
    }

    fn is_initialized(&self) -> bool {
        self.inner.status_map.read().is_some()
    }

    fn get_status(&self, id: &UserStatusId) -> Option<UserStatus> {
        let guard = self.inner.status_map.read();
        let Some(map) = guard.as_ref() else {
            warn!("Tried to read status {id} before the status map was initialized.");
            return None;
        };
        map.get_status(id).cloned()
    }

    fn get_status_action(&self, id: &UserStatusId) -> Option<UserStatusAction> {
        let guard = self.inner.status_map.read();
        let Some(map) = guard.as_ref() else {
            warn!("Tried to read the action of status {id} before the status map was initialized.");
            return None;
        };
        map.get_action(id)
    }
}

impl CachingUserStatusRepository {
    fn revalidate_in_background(&self) {
        let inner = self.inner.clone();
        let generation = inner.generation.load(Ordering::SeqCst);

        tokio::spawn(async move {
            let statuses = match inner.load_statuses().await {
                Ok(statuses) => statuses,
                Err(err) => {
                    warn!("Failed to revalidate cached user statuses. Keeping cached values. {err:?}");
                    return;
                }
            };

            let _guard = inner.initialize_lock.lock().await;
            if inner.generation.load(Ordering::SeqCst) != generation {
                info!("Discarding revalidated user statuses after the status map was reset.");
                return;
            }

            inner.apply(&statuses);
            inner.persist(&statuses).await;
        });
    }
}

impl RepositoryInner {
    async fn load_statuses(&self) -> Result<Vec<UserStatus>> {
        let statuses = self
            .service
            .load_user_statuses()
            .await
            .context("Failed to load user statuses")?;
        info!("Loaded {} user statuses.", statuses.len());
        Ok(statuses)
    }

    fn apply(&self, statuses: &[UserStatus]) {
        *self.status_map.write() = Some(UserStatusMap::build(statuses, &self.resolver));
    }

    async fn persist(&self, statuses: &[UserStatus]) {
        if let Err(err) = self.cache.save(statuses).await {
            warn!("Failed to persist user statuses. {err:?}");
        }
    }
}
