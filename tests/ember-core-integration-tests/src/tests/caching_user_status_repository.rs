// ember-core-client/ember-core-integration-tests
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use mockall::Sequence;
use pretty_assertions::assert_eq;

use ember_core_client::domain::user_status::repos::UserStatusRepository;
use ember_core_client::domain::user_status::services::mocks::MockUserStatusService;
use ember_core_client::dtos::{
    RequestError, StatusActionResolver, UserStatus, UserStatusAction, UserStatusId,
};
use ember_core_client::infra::user_status::{CachingUserStatusRepository, UserStatusCache};
use ember_core_client::InMemoryKeyValueStore;

use super::async_test;

fn statuses() -> Vec<UserStatus> {
    vec![
        UserStatus::new(1, UserStatus::ONBOARDING_INCOMPLETE),
        UserStatus::new(2, UserStatus::SUBSCRIBED),
    ]
}

fn repository(
    service: MockUserStatusService,
    cache: UserStatusCache,
    revalidate_cached_statuses: bool,
) -> CachingUserStatusRepository {
    CachingUserStatusRepository::new(
        cache,
        Arc::new(service),
        StatusActionResolver::default(),
        revalidate_cached_statuses,
    )
}

#[async_test]
async fn test_fetches_and_caches_statuses() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service
        .expect_load_user_statuses()
        .once()
        .return_once(|| Box::pin(async { Ok(statuses()) }));

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    let repo = repository(service, cache.clone(), true);

    assert!(!repo.is_initialized());
    assert_eq!(repo.get_status_action(&UserStatusId::new(2)), None);

    repo.initialize(false).await?;
    // Initializing again is a no-op.
    repo.initialize(false).await?;

    assert!(repo.is_initialized());
    assert_eq!(
        repo.get_status_action(&UserStatusId::new(1)),
        Some(UserStatusAction::NavigateToQuestionnaire)
    );
    assert_eq!(
        repo.get_status_action(&UserStatusId::new(2)),
        Some(UserStatusAction::NavigateToHome)
    );
    assert_eq!(repo.get_status_action(&UserStatusId::new(999)), None);
    assert_eq!(
        repo.get_status(&UserStatusId::new(2)),
        Some(UserStatus::new(2, UserStatus::SUBSCRIBED))
    );
    assert_eq!(cache.load().await, Some(statuses()));

    Ok(())
}

#[async_test]
async fn test_uses_cached_statuses_without_revalidation() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service.expect_load_user_statuses().never();

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    cache.save(&statuses()).await?;

    let repo = repository(service, cache, false);
    repo.initialize(false).await?;

    assert_eq!(
        repo.get_status_action(&UserStatusId::new(2)),
        Some(UserStatusAction::NavigateToHome)
    );

    Ok(())
}

#[async_test]
async fn test_revalidates_cached_statuses_in_background() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service.expect_load_user_statuses().once().return_once(|| {
        Box::pin(async { Ok(vec![UserStatus::new(2, UserStatus::ONBOARDING_COMPLETE)]) })
    });

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    cache.save(&statuses()).await?;

    let repo = repository(service, cache.clone(), true);
    repo.initialize(false).await?;

    // The cached map is served right away…
    assert_eq!(
        repo.get_status_action(&UserStatusId::new(2)),
        Some(UserStatusAction::NavigateToHome)
    );

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    // …and replaced once the fresh statuses arrived.
    assert_eq!(
        repo.get_status_action(&UserStatusId::new(2)),
        Some(UserStatusAction::NavigateToPaywall)
    );
    assert_eq!(repo.get_status(&UserStatusId::new(1)), None);
    assert_eq!(
        cache.load().await,
        Some(vec![UserStatus::new(2, UserStatus::ONBOARDING_COMPLETE)])
    );

    Ok(())
}

#[async_test]
async fn test_fetch_errors_are_propagated() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service.expect_load_user_statuses().once().return_once(|| {
        Box::pin(async {
            Err(RequestError::TimedOut {
                url: "https://api.ember.app/api/v1/auth/statuses".to_string(),
            })
        })
    });

    let repo = repository(
        service,
        UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new())),
        true,
    );

    let err = repo.initialize(false).await.unwrap_err();
    assert!(err
        .chain()
        .any(|cause| cause.downcast_ref::<RequestError>().is_some()));
    assert!(!repo.is_initialized());

    Ok(())
}

#[async_test]
async fn test_refresh_bypasses_cache_and_reset_clears_it() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service
        .expect_load_user_statuses()
        .times(1)
        .returning(|| Box::pin(async { Ok(statuses()) }));

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    cache
        .save(&[UserStatus::new(7, UserStatus::ONBOARDED_COMPLETE)])
        .await?;

    let repo = repository(service, cache.clone(), false);
    repo.refresh().await?;

    assert_eq!(repo.get_status(&UserStatusId::new(7)), None);
    assert_eq!(
        repo.get_status_action(&UserStatusId::new(1)),
        Some(UserStatusAction::NavigateToQuestionnaire)
    );

    repo.reset().await?;

    assert!(!repo.is_initialized());
    assert_eq!(cache.load().await, None);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reset_discards_pending_revalidation() -> Result<()> {
    let mut service = MockUserStatusService::new();
    service.expect_load_user_statuses().once().return_once(|| {
        Box::pin(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(statuses())
        })
    });

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    cache
        .save(&[UserStatus::new(2, UserStatus::SUBSCRIBED)])
        .await?;

    let repo = repository(service, cache.clone(), true);
    repo.initialize(false).await?;
    assert!(repo.is_initialized());

    repo.reset().await?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!repo.is_initialized());
    assert_eq!(cache.load().await, None);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_forced_refresh_wins_over_pending_revalidation() -> Result<()> {
    let mut seq = Sequence::new();
    let mut service = MockUserStatusService::new();
    service
        .expect_load_user_statuses()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(vec![UserStatus::new(2, UserStatus::ONBOARDING_COMPLETE)])
            })
        });
    service
        .expect_load_user_statuses()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(statuses()) }));

    let cache = UserStatusCache::new(Arc::new(InMemoryKeyValueStore::new()));
    cache
        .save(&[UserStatus::new(7, UserStatus::ONBOARDED_COMPLETE)])
        .await?;

    let repo = repository(service, cache.clone(), true);
    repo.initialize(false).await?;
    // Let the revalidation issue its request.
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    repo.refresh().await?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(
        repo.get_status_action(&UserStatusId::new(2)),
        Some(UserStatusAction::NavigateToHome)
    );
    assert_eq!(cache.load().await, Some(statuses()));

    Ok(())
}
