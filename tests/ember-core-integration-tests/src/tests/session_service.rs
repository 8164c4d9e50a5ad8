// ember-core-client/ember-core-integration-tests
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use ember_core_client::domain::tracking::repos::TrackingRecordsRepository;
use ember_core_client::infra::tracking::InMemoryTrackingRecordsRepository;
use ember_core_client::services::SessionService;
use ember_core_client::test::{mock_data, MockAppDependencies};
use ember_core_client::ClientEvent;

use super::{async_test, collect_events, record};

#[async_test]
async fn test_stores_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.auth_repo
        .expect_store_tokens()
        .once()
        .with(predicate::eq(mock_data::auth_tokens()))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.auth_repo
        .expect_store_user()
        .once()
        .with(predicate::eq(mock_data::user(None)))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let service = SessionService::from(&deps.into_deps());
    assert!(!service.is_signed_in());

    service
        .store_session(mock_data::auth_tokens(), mock_data::user(None))
        .await?;

    assert!(service.is_signed_in());
    assert_eq!(service.current_user(), Some(mock_data::user(None)));

    Ok(())
}

#[async_test]
async fn test_updates_current_user() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = mock_data::signed_in_context();
    deps.auth_repo
        .expect_store_user()
        .once()
        .with(predicate::eq(mock_data::user(Some(3))))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let service = SessionService::from(&deps.into_deps());
    service.update_user(mock_data::user(Some(3))).await?;

    assert_eq!(service.current_user(), Some(mock_data::user(Some(3))));

    let mut other_user = mock_data::user(Some(3));
    other_user.id = "user-test-2".into();
    assert!(service.update_user(other_user).await.is_err());

    Ok(())
}

#[async_test]
async fn test_sign_out_clears_session_and_cached_data() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = mock_data::signed_in_context();
    let events = collect_events(&mut deps.client_event_dispatcher);
    deps.auth_repo
        .expect_clear()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    deps.user_status_repo
        .expect_reset()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));

    let repo = std::sync::Arc::new(InMemoryTrackingRecordsRepository::new());
    repo.set_first_page(vec![record(1, 10)]);

    let mut deps = deps.into_deps();
    deps.tracking_records_repo = repo.clone();

    let service = SessionService::from(&deps);
    service.sign_out().await?;

    assert!(!service.is_signed_in());
    assert_eq!(service.current_user(), None);
    assert!(repo.get_all().is_empty());
    assert_eq!(*events.lock(), vec![ClientEvent::TrackingRecordsChanged]);

    Ok(())
}
