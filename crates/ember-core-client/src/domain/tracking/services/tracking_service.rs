// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::shared::models::{BackendUserId, RequestError};
use crate::domain::tracking::models::{NewTrackingRecord, TrackingRecord, TrackingRecordChange};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TrackingService: Send + Sync {
    /// Loads the page at `offset` of the records of `user_id`.
    async fn load_records(
        &self,
        user_id: &BackendUserId,
        offset: u32,
    ) -> Result<Vec<TrackingRecord>, RequestError>;

    /// Creates a record and returns it as stored by the server.
    async fn create_record(
        &self,
        record: &NewTrackingRecord,
    ) -> Result<TrackingRecord, RequestError>;

    async fn update_record(
        &self,
        record_id: i64,
        change: &TrackingRecordChange,
    ) -> Result<(), RequestError>;

    async fn delete_record(&self, record_id: i64) -> Result<(), RequestError>;
}
