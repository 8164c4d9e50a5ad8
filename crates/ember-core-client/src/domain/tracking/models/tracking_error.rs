// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RequestError;
use crate::domain::tracking::models::TrackingRecordId;

#[derive(thiserror::Error, Debug)]
pub enum TrackingError {
    #[error("Another change of tracking record {id} is still in progress.")]
    MutationInFlight { id: TrackingRecordId },
    #[error("Tracking record {id} has not been confirmed by the server yet.")]
    NotConfirmed { id: TrackingRecordId },
    #[error("Tracking record {id} does not exist.")]
    NotFound { id: TrackingRecordId },
    #[error(transparent)]
    RequestError(#[from] RequestError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
