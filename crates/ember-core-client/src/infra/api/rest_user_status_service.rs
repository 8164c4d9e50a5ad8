// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::info;

use crate::domain::shared::models::RequestError;
use crate::domain::user_status::models::UserStatus;
use crate::domain::user_status::services::UserStatusService;
use crate::infra::api::user_status_payload::UserStatusesPayload;
use crate::infra::api::ApiClient;

pub struct RestUserStatusService {
    api: ApiClient,
}

impl RestUserStatusService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserStatusService for RestUserStatusService {
    async fn load_user_statuses(&self) -> Result<Vec<UserStatus>, RequestError> {
        let url = self.api.url(["api", "v1", "auth", "statuses"])?;
        let payload = self.api.get::<UserStatusesPayload>(url, false).await?;
        let statuses = payload.into_statuses();
        info!("Loaded {} user statuses.", statuses.len());
        Ok(statuses)
    }
}
