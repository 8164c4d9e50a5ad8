// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::shared::models::BackendUserId;
use crate::domain::tracking::models::{OptimisticRecordId, TrackingRecord, TrackingTypeId};

/// A record that should be created on the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrackingRecord {
    pub user_id: BackendUserId,
    pub tracking_type_id: TrackingTypeId,
    pub event_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewTrackingRecord {
    pub fn to_optimistic_record(&self, id: OptimisticRecordId) -> TrackingRecord {
        TrackingRecord {
            id: id.into(),
            user_id: self.user_id,
            tracking_type_id: self.tracking_type_id,
            event_at: self.event_at,
            note: self.note.clone(),
        }
    }
}
