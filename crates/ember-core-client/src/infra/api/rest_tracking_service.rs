// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::debug;

use crate::domain::shared::models::{BackendUserId, RequestError};
use crate::domain::tracking::models::{NewTrackingRecord, TrackingRecord, TrackingRecordChange};
use crate::domain::tracking::services::TrackingService;
use crate::infra::api::api_client::{parse_json, to_json};
use crate::infra::api::tracking_payload::{TrackingRecordPayload, TrackingRecordsPayload};
use crate::infra::api::{ApiClient, HttpMethod};

pub struct RestTrackingService {
    api: ApiClient,
}

impl RestTrackingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TrackingService for RestTrackingService {
    async fn load_records(
        &self,
        user_id: &BackendUserId,
        offset: u32,
    ) -> Result<Vec<TrackingRecord>, RequestError> {
        let mut url = self.api.url(["api", "v1", "tracking"])?;
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string())
            .append_pair("offset", &offset.to_string());

        let payload = self.api.get::<TrackingRecordsPayload>(url, true).await?;
        payload.into_records()
    }

    async fn create_record(
        &self,
        record: &NewTrackingRecord,
    ) -> Result<TrackingRecord, RequestError> {
        let url = self.api.url(["api", "v1", "tracking"])?;
        let response = self
            .api
            .send(HttpMethod::Post, url, Some(to_json(record)?), true)
            .await?;
        let record = parse_json::<TrackingRecordPayload>(&response.body)?.into_record()?;
        debug!("Created tracking record {}.", record.id);
        Ok(record)
    }

    async fn update_record(
        &self,
        record_id: i64,
        change: &TrackingRecordChange,
    ) -> Result<(), RequestError> {
        let record_id = record_id.to_string();
        let url = self.api.url(["api", "v1", "tracking", record_id.as_str()])?;
        self.api
            .send(HttpMethod::Patch, url, Some(to_json(change)?), true)
            .await?;
        Ok(())
    }

    async fn delete_record(&self, record_id: i64) -> Result<(), RequestError> {
        let record_id = record_id.to_string();
        let url = self.api.url(["api", "v1", "tracking", record_id.as_str()])?;
        self.api.send(HttpMethod::Delete, url, None, true).await?;
        Ok(())
    }
}
