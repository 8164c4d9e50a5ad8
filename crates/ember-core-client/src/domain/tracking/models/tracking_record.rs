// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ember_utils::{id_int, id_string};

use crate::domain::shared::models::BackendUserId;

id_string!(
    /// Client-generated id of a record that has not been confirmed by the server yet.
    OptimisticRecordId
);

id_int!(TrackingTypeId);

/// Identifies a tracking record. Server-assigned and client-generated ids live in separate
/// spaces and can never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackingRecordId {
    Confirmed(i64),
    Optimistic(OptimisticRecordId),
}

impl TrackingRecordId {
    pub fn confirmed(&self) -> Option<i64> {
        match self {
            TrackingRecordId::Confirmed(id) => Some(*id),
            TrackingRecordId::Optimistic(_) => None,
        }
    }

    pub fn is_optimistic(&self) -> bool {
        matches!(self, TrackingRecordId::Optimistic(_))
    }
}

impl From<i64> for TrackingRecordId {
    fn from(value: i64) -> Self {
        TrackingRecordId::Confirmed(value)
    }
}

impl From<OptimisticRecordId> for TrackingRecordId {
    fn from(value: OptimisticRecordId) -> Self {
        TrackingRecordId::Optimistic(value)
    }
}

impl Display for TrackingRecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackingRecordId::Confirmed(id) => write!(f, "{id}"),
            TrackingRecordId::Optimistic(id) => write!(f, "optimistic:{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub id: TrackingRecordId,
    pub user_id: BackendUserId,
    pub tracking_type_id: TrackingTypeId,
    pub event_at: DateTime<Utc>,
    pub note: Option<String>,
}
