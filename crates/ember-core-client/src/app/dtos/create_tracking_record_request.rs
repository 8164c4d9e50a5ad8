// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::tracking::models::TrackingTypeId;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTrackingRecordRequest {
    pub tracking_type_id: TrackingTypeId,
    /// Defaults to the current time.
    pub event_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}
