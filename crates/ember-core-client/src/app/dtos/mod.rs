// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::auth::models::{AuthTokens, BootstrapAuthResult, SessionValidation, UserData};
pub use crate::domain::navigation::models::{
    AuthMode, NavigationError, PendingRoute, Route, RouteParams, StartupState,
};
pub use crate::domain::shared::models::{BackendUserId, RequestError, UserId};
pub use crate::domain::tracking::models::{
    OptimisticRecordId, TrackingError, TrackingRecord, TrackingRecordChange, TrackingRecordId,
    TrackingRecordsPage, TrackingTypeId,
};
pub use crate::domain::user_status::models::{UserStatus, UserStatusAction, UserStatusId};
pub use crate::domain::user_status::services::StatusActionResolver;

pub use create_tracking_record_request::CreateTrackingRecordRequest;

mod create_tracking_record_request;
