// ember-core-client/ember-core-integration-tests
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use ember_core_client::domain::auth::services::mocks::MockAuthService;
use ember_core_client::domain::navigation::services::mocks::MockNavigationSurface;
use ember_core_client::dtos::{
    AuthMode, CreateTrackingRecordRequest, PendingRoute, Route, SessionValidation,
    StartupState, TrackingRecordId, TrackingTypeId, UserStatusId,
};
use ember_core_client::infra::api::mocks::MockHttpTransport;
use ember_core_client::test::{mock_data, ConstantTimeProvider, IncrementingIDProvider};
use ember_core_client::{
    Client, ClientDelegate, ClientEvent, HttpMethod, HttpResponse, InMemoryKeyValueStore, Toast,
};

use super::async_test;

#[derive(Default, Clone)]
struct RecordingDelegate {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}

#[async_test]
async fn test_new_user_is_sent_to_signup() -> Result<()> {
    let mut auth_service = MockAuthService::new();
    auth_service.expect_validate_session().never();

    let mut navigation_surface = MockNavigationSurface::new();
    navigation_surface.expect_is_ready().returning(|| true);
    navigation_surface
        .expect_reset()
        .once()
        .with(predicate::eq(PendingRoute::auth(AuthMode::Signup)))
        .returning(|_| Ok(()));

    let delegate = RecordingDelegate::default();

    let client = Client::builder()
        .set_store(InMemoryKeyValueStore::new())
        .set_http_transport(MockHttpTransport::new())
        .set_auth_service(auth_service)
        .set_navigation_surface(navigation_surface)
        .set_delegate(Some(Box::new(delegate.clone())))
        .build();

    client.set_navigation_ready().await;
    client.start().await;

    assert_eq!(client.startup.state(), StartupState::Committed);
    assert_eq!(
        delegate.events.lock().last(),
        Some(&ClientEvent::StartupStateChanged {
            state: StartupState::Committed
        })
    );

    Ok(())
}

#[async_test]
async fn test_returning_user_is_routed_home_and_can_track() -> Result<()> {
    let store = InMemoryKeyValueStore::with_values([
        ("session_jwt", "jwt-1"),
        ("session_token", "session-1"),
        ("user_id", "user-test-1"),
    ]);

    let mut auth_service = MockAuthService::new();
    auth_service
        .expect_validate_session()
        .once()
        .with(predicate::eq(mock_data::auth_tokens()))
        .return_once(|_| {
            Box::pin(async {
                Ok(SessionValidation::Valid {
                    user: Some(mock_data::user(Some(2))),
                })
            })
        });

    let mut transport = MockHttpTransport::new();
    transport
        .expect_send()
        .once()
        .withf(|request| request.url.path() == "/api/v1/auth/statuses")
        .return_once(|_| {
            Box::pin(async {
                Ok(HttpResponse::new(
                    200,
                    r#"[{"id": 1, "code": "onboarding_incomplete"}, {"id": 2, "code": "subscribed"}]"#,
                ))
            })
        });
    transport
        .expect_send()
        .once()
        .withf(|request| {
            request.method == HttpMethod::Post && request.url.path() == "/api/v1/tracking"
        })
        .return_once(|_| {
            Box::pin(async {
                Ok(HttpResponse::new(
                    201,
                    r#"{"data": {"record_id": 11, "user_id": 42, "tracking_type_id": 1, "event_at": "2024-03-01T12:00:00Z"}}"#,
                ))
            })
        });

    let mut navigation_surface = MockNavigationSurface::new();
    navigation_surface.expect_is_ready().returning(|| true);
    navigation_surface
        .expect_reset()
        .once()
        .with(predicate::eq(PendingRoute::new(Route::Home)))
        .returning(|_| Ok(()));

    let delegate = RecordingDelegate::default();

    let client = Client::builder()
        .set_store(store)
        .set_http_transport(transport)
        .set_auth_service(auth_service)
        .set_navigation_surface(navigation_surface)
        .set_id_provider(IncrementingIDProvider::new("temp"))
        .set_time_provider(ConstantTimeProvider::new(mock_data::reference_date()))
        .set_delegate(Some(Box::new(delegate.clone())))
        .build();

    client.start().await;
    client.set_navigation_ready().await;

    assert_eq!(client.startup.state(), StartupState::Committed);
    assert_eq!(
        client.user_status.route_for_status(&UserStatusId::new(1)),
        Some(Route::Questionnaire)
    );
    assert_eq!(client.session.current_user(), Some(mock_data::user(Some(2))));

    let record = client
        .journal
        .create_record(CreateTrackingRecordRequest {
            tracking_type_id: TrackingTypeId::new(1),
            event_at: None,
            note: None,
        })
        .await?;

    assert_eq!(record.id, TrackingRecordId::Confirmed(11));
    assert_eq!(client.journal.records(), vec![record]);
    assert!(delegate.events.lock().contains(&ClientEvent::ToastRequested {
        toast: Toast::success("Your tracking entry has been saved!")
    }));

    Ok(())
}
