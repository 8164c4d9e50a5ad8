// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::tracking::models::{TrackingRecord, TrackingTypeId};

/// A partial update of a tracking record. Fields that are `None` are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrackingRecordChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type_id: Option<TrackingTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TrackingRecordChange {
    pub fn apply_to(&self, record: &TrackingRecord) -> TrackingRecord {
        let mut record = record.clone();
        if let Some(tracking_type_id) = self.tracking_type_id {
            record.tracking_type_id = tracking_type_id;
        }
        if let Some(event_at) = self.event_at {
            record.event_at = event_at;
        }
        if let Some(note) = &self.note {
            record.note = Some(note.clone());
        }
        record
    }
}
