// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::domain::shared::models::{BackendUserId, RequestError};
use crate::domain::tracking::models::{TrackingRecord, TrackingRecordId, TrackingTypeId};

#[derive(Deserialize, Debug)]
pub(super) struct ApiTrackingRecord {
    record_id: i64,
    user_id: i64,
    tracking_type_id: i64,
    event_at: String,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(super) struct ApiTrackingRecordCollection {
    #[serde(default)]
    records: Option<Vec<ApiTrackingRecord>>,
    #[serde(default)]
    tracking_records: Option<Vec<ApiTrackingRecord>>,
}

/// The shapes in which the backend returns a list of records.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(super) enum TrackingRecordsPayload {
    List(Vec<ApiTrackingRecord>),
    Envelope { data: ApiTrackingRecordCollection },
    Collection(ApiTrackingRecordCollection),
}

/// The shapes in which the backend returns a single record.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(super) enum TrackingRecordPayload {
    List(Vec<ApiTrackingRecord>),
    Record { record: ApiTrackingRecord },
    Envelope { data: ApiTrackingRecord },
    Bare(ApiTrackingRecord),
}

impl ApiTrackingRecordCollection {
    fn into_records(self) -> Vec<ApiTrackingRecord> {
        match (self.records, self.tracking_records) {
            (Some(records), _) if !records.is_empty() => records,
            (_, Some(records)) => records,
            _ => vec![],
        }
    }
}

impl TrackingRecordsPayload {
    pub fn into_records(self) -> Result<Vec<TrackingRecord>, RequestError> {
        let records = match self {
            TrackingRecordsPayload::List(records) => records,
            TrackingRecordsPayload::Envelope { data } => data.into_records(),
            TrackingRecordsPayload::Collection(collection) => collection.into_records(),
        };
        records.into_iter().map(TryInto::try_into).collect()
    }
}

impl TrackingRecordPayload {
    pub fn into_record(self) -> Result<TrackingRecord, RequestError> {
        let record = match self {
            TrackingRecordPayload::List(records) => {
                records.into_iter().next().ok_or(RequestError::Parse {
                    msg: "Expected a tracking record but received an empty list.".to_string(),
                })?
            }
            TrackingRecordPayload::Record { record } => record,
            TrackingRecordPayload::Envelope { data } => data,
            TrackingRecordPayload::Bare(record) => record,
        };
        record.try_into()
    }
}

impl TryFrom<ApiTrackingRecord> for TrackingRecord {
    type Error = RequestError;

    fn try_from(value: ApiTrackingRecord) -> Result<Self, Self::Error> {
        Ok(TrackingRecord {
            id: TrackingRecordId::Confirmed(value.record_id),
            user_id: BackendUserId::new(value.user_id),
            tracking_type_id: TrackingTypeId::new(value.tracking_type_id),
            event_at: parse_timestamp(&value.event_at)?,
            note: value.note,
        })
    }
}

/// Parses RFC 3339 timestamps. Timestamps without an offset are interpreted as UTC.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RequestError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|date| date.and_utc())
        .map_err(|err| RequestError::Parse {
            msg: format!("Invalid timestamp '{value}'. {err}"),
        })
}
