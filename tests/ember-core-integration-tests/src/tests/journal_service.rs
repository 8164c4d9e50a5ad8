// ember-core-client/ember-core-integration-tests
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use mockall::predicate;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use ember_core_client::app::deps::AppDependencies;
use ember_core_client::domain::tracking::models::NewTrackingRecord;
use ember_core_client::domain::tracking::repos::TrackingRecordsRepository;
use ember_core_client::dtos::{
    CreateTrackingRecordRequest, OptimisticRecordId, RequestError, TrackingError,
    TrackingRecordChange, TrackingRecordId, TrackingTypeId,
};
use ember_core_client::infra::tracking::InMemoryTrackingRecordsRepository;
use ember_core_client::services::JournalService;
use ember_core_client::test::{mock_data, MockAppDependencies};
use ember_core_client::{ClientEvent, Toast};

use super::{async_test, collect_events, record};

type Events = Arc<Mutex<Vec<ClientEvent>>>;

struct Fixture {
    deps: MockAppDependencies,
    events: Events,
    repo: Arc<InMemoryTrackingRecordsRepository>,
}

impl Fixture {
    fn new() -> Self {
        let mut deps = MockAppDependencies::default();
        deps.ctx = mock_data::signed_in_context();
        let events = collect_events(&mut deps.client_event_dispatcher);

        let repo = Arc::new(InMemoryTrackingRecordsRepository::new());
        repo.set_first_page(vec![record(1, 10), record(2, 8)]);

        Self { deps, events, repo }
    }

    fn into_service(self) -> (JournalService, Arc<InMemoryTrackingRecordsRepository>, Events) {
        let mut deps: AppDependencies = self.deps.into_deps();
        deps.tracking_records_repo = self.repo.clone();
        (JournalService::from(&deps), self.repo, self.events)
    }
}

fn record_ids(repo: &InMemoryTrackingRecordsRepository) -> Vec<TrackingRecordId> {
    repo.get_all().into_iter().map(|record| record.id).collect()
}

fn toasts(events: &Mutex<Vec<ClientEvent>>) -> Vec<Toast> {
    events
        .lock()
        .iter()
        .filter_map(|event| match event {
            ClientEvent::ToastRequested { toast } => Some(toast.clone()),
            _ => None,
        })
        .collect()
}

fn analytics_invalidations(events: &Mutex<Vec<ClientEvent>>) -> usize {
    events
        .lock()
        .iter()
        .filter(|event| **event == ClientEvent::AnalyticsInvalidated)
        .count()
}

#[async_test]
async fn test_create_inserts_optimistic_record_and_replaces_it() -> Result<()> {
    let mut fixture = Fixture::new();
    let event_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    {
        let repo = fixture.repo.clone();
        let mut server_record = record(3, 9);
        server_record.note = Some("After lunch".to_string());

        fixture
            .deps
            .tracking_service
            .expect_create_record()
            .once()
            .with(predicate::eq(NewTrackingRecord {
                user_id: mock_data::backend_user_id(),
                tracking_type_id: TrackingTypeId::new(1),
                event_at,
                note: Some("After lunch".to_string()),
            }))
            .return_once(move |_| {
                // The optimistic record is visible while the request is running.
                assert_eq!(
                    record_ids(&repo),
                    vec![
                        TrackingRecordId::Confirmed(1),
                        TrackingRecordId::Optimistic(OptimisticRecordId::from("temp-1")),
                        TrackingRecordId::Confirmed(2),
                    ]
                );
                Box::pin(async { Ok(server_record) })
            });
    }

    let (service, repo, events) = fixture.into_service();

    let created = service
        .create_record(CreateTrackingRecordRequest {
            tracking_type_id: TrackingTypeId::new(1),
            event_at: Some(event_at),
            note: Some("After lunch".to_string()),
        })
        .await?;

    assert_eq!(created.id, TrackingRecordId::Confirmed(3));
    assert_eq!(
        record_ids(&repo),
        vec![
            TrackingRecordId::Confirmed(1),
            TrackingRecordId::Confirmed(3),
            TrackingRecordId::Confirmed(2),
        ]
    );
    assert_eq!(
        toasts(&events),
        vec![Toast::success("Your tracking entry has been saved!")]
    );
    assert_eq!(analytics_invalidations(&events), 1);

    Ok(())
}

#[async_test]
async fn test_create_defaults_to_current_time() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_create_record()
        .once()
        .withf(|record| record.event_at == mock_data::reference_date())
        .return_once(|_| Box::pin(async { Ok(record(3, 12)) }));

    let (service, repo, _) = fixture.into_service();

    service
        .create_record(CreateTrackingRecordRequest {
            tracking_type_id: TrackingTypeId::new(1),
            event_at: None,
            note: None,
        })
        .await?;

    assert_eq!(
        record_ids(&repo),
        vec![
            TrackingRecordId::Confirmed(3),
            TrackingRecordId::Confirmed(1),
            TrackingRecordId::Confirmed(2),
        ]
    );

    Ok(())
}

#[async_test]
async fn test_failed_create_removes_optimistic_record() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_create_record()
        .once()
        .return_once(|_| {
            Box::pin(async {
                Err(RequestError::Api {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                })
            })
        });

    let (service, repo, events) = fixture.into_service();
    let records_before = repo.pages();

    let result = service
        .create_record(CreateTrackingRecordRequest {
            tracking_type_id: TrackingTypeId::new(2),
            event_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            note: None,
        })
        .await;

    assert!(matches!(result, Err(TrackingError::RequestError(_))));
    assert_eq!(repo.pages(), records_before);
    assert_eq!(
        toasts(&events),
        vec![Toast::error("Failed to save tracking entry")]
    );
    assert_eq!(analytics_invalidations(&events), 0);

    Ok(())
}

#[async_test]
async fn test_update_changes_cached_record() -> Result<()> {
    let mut fixture = Fixture::new();
    let change = TrackingRecordChange {
        note: Some("Stressful meeting".to_string()),
        ..Default::default()
    };

    fixture
        .deps
        .tracking_service
        .expect_update_record()
        .once()
        .with(predicate::eq(2), predicate::eq(change.clone()))
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let (service, repo, events) = fixture.into_service();

    let updated = service
        .update_record(&TrackingRecordId::Confirmed(2), change)
        .await?;

    let mut expected_record = record(2, 8);
    expected_record.note = Some("Stressful meeting".to_string());

    assert_eq!(updated, expected_record);
    assert_eq!(
        repo.get(&TrackingRecordId::Confirmed(2)),
        Some(expected_record)
    );
    assert_eq!(
        toasts(&events),
        vec![Toast::success("Your tracking entry has been updated!")]
    );
    assert_eq!(analytics_invalidations(&events), 1);

    Ok(())
}

#[async_test]
async fn test_failed_update_restores_snapshot() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_update_record()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                Err(RequestError::TimedOut {
                    url: "https://api.ember.app/api/v1/tracking/1".to_string(),
                })
            })
        });

    let (service, repo, events) = fixture.into_service();
    let records_before = repo.pages();

    let result = service
        .update_record(
            &TrackingRecordId::Confirmed(1),
            TrackingRecordChange {
                note: Some("Changed".to_string()),
                tracking_type_id: Some(TrackingTypeId::new(4)),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(repo.pages(), records_before);
    assert_eq!(
        toasts(&events),
        vec![Toast::error("Failed to update tracking entry")]
    );
    assert_eq!(analytics_invalidations(&events), 0);

    Ok(())
}

#[async_test]
async fn test_delete_removes_cached_record() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_delete_record()
        .once()
        .with(predicate::eq(1))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let (service, repo, events) = fixture.into_service();
    service.delete_record(&TrackingRecordId::Confirmed(1)).await?;

    assert_eq!(record_ids(&repo), vec![TrackingRecordId::Confirmed(2)]);
    assert_eq!(
        toasts(&events),
        vec![Toast::success("Tracking entry has been deleted!")]
    );
    assert_eq!(analytics_invalidations(&events), 1);

    Ok(())
}

#[async_test]
async fn test_failed_delete_restores_record() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_delete_record()
        .once()
        .return_once(|_| {
            Box::pin(async {
                Err(RequestError::ConnectionFailed {
                    msg: "offline".to_string(),
                })
            })
        });

    let (service, repo, events) = fixture.into_service();
    let records_before = repo.get_all();

    let result = service.delete_record(&TrackingRecordId::Confirmed(2)).await;

    assert!(matches!(result, Err(TrackingError::RequestError(_))));
    assert_eq!(repo.get_all(), records_before);
    assert_eq!(
        toasts(&events),
        vec![Toast::error("Failed to delete tracking entry")]
    );

    Ok(())
}

#[async_test]
async fn test_rejects_changes_of_unconfirmed_or_unknown_records() -> Result<()> {
    let mut fixture = Fixture::new();
    fixture.deps.tracking_service.expect_update_record().never();
    fixture.deps.tracking_service.expect_delete_record().never();

    let (service, _, events) = fixture.into_service();
    let optimistic_id = TrackingRecordId::Optimistic(OptimisticRecordId::from("temp-9"));

    assert!(matches!(
        service
            .update_record(&optimistic_id, TrackingRecordChange::default())
            .await,
        Err(TrackingError::NotConfirmed { .. })
    ));
    assert!(matches!(
        service.delete_record(&optimistic_id).await,
        Err(TrackingError::NotConfirmed { .. })
    ));
    assert!(matches!(
        service.delete_record(&TrackingRecordId::Confirmed(99)).await,
        Err(TrackingError::NotFound { .. })
    ));
    assert!(events.lock().is_empty());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_rejects_overlapping_mutations_of_a_record() -> Result<()> {
    let mut fixture = Fixture::new();

    fixture
        .deps
        .tracking_service
        .expect_update_record()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(())
            })
        });
    fixture.deps.tracking_service.expect_delete_record().never();

    let (service, repo, _) = fixture.into_service();
    let id = TrackingRecordId::Confirmed(1);

    let (update_result, delete_result) = tokio::join!(
        service.update_record(
            &id,
            TrackingRecordChange {
                note: Some("Changed".to_string()),
                ..Default::default()
            }
        ),
        service.delete_record(&id)
    );

    assert!(update_result.is_ok());
    assert!(matches!(
        delete_result,
        Err(TrackingError::MutationInFlight { .. })
    ));
    assert_eq!(
        repo.get(&id).and_then(|record| record.note),
        Some("Changed".to_string())
    );

    Ok(())
}

#[async_test]
async fn test_loads_pages_until_exhausted() -> Result<()> {
    let mut fixture = Fixture::new();

    let first_page = (0..10)
        .map(|idx| record(100 - idx, 23 - idx as u32))
        .collect::<Vec<_>>();
    let second_page = vec![record(50, 2), record(49, 1)];

    {
        let first_page = first_page.clone();
        fixture
            .deps
            .tracking_service
            .expect_load_records()
            .once()
            .with(
                predicate::eq(mock_data::backend_user_id()),
                predicate::eq(0),
            )
            .return_once(|_, _| Box::pin(async { Ok(first_page) }));
    }
    {
        let second_page = second_page.clone();
        fixture
            .deps
            .tracking_service
            .expect_load_records()
            .once()
            .with(
                predicate::eq(mock_data::backend_user_id()),
                predicate::eq(1),
            )
            .return_once(|_, _| Box::pin(async { Ok(second_page) }));
    }

    let (service, repo, events) = fixture.into_service();

    assert_eq!(service.load_records().await?, first_page);
    assert!(service.load_next_page().await?);
    assert!(!service.load_next_page().await?);

    assert_eq!(repo.pages().len(), 2);
    assert_eq!(
        service.records(),
        first_page.into_iter().chain(second_page).collect::<Vec<_>>()
    );
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::TrackingRecordsChanged,
            ClientEvent::TrackingRecordsChanged
        ]
    );

    Ok(())
}

#[async_test]
async fn test_loading_records_requires_signed_in_user() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.tracking_service.expect_load_records().never();

    let service = JournalService::from(&deps.into_deps());
    assert!(service.load_records().await.is_err());

    Ok(())
}
