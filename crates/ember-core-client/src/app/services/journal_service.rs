// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::{error, info};

use ember_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynIDProvider, DynTimeProvider,
    DynTrackingRecordsRepository, DynTrackingService,
};
use crate::app::dtos::CreateTrackingRecordRequest;
use crate::domain::tracking::models::{
    NewTrackingRecord, OptimisticRecordId, TrackingError, TrackingRecord, TrackingRecordChange,
    TrackingRecordId,
};
use crate::{ClientEvent, Toast};

#[derive(InjectDependencies)]
pub struct JournalService {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    tracking_records_repo: DynTrackingRecordsRepository,
    #[inject]
    tracking_service: DynTrackingService,

    records_in_flight: Mutex<HashSet<TrackingRecordId>>,
}

impl JournalService {
    /// Loads the first page of the user's tracking records and replaces all cached records.
    pub async fn load_records(&self) -> Result<Vec<TrackingRecord>> {
        let user_id = self.ctx.current_backend_user_id()?;
        let records = self.tracking_service.load_records(&user_id, 0).await?;

        info!("Loaded {} tracking records.", records.len());
        self.tracking_records_repo.set_first_page(records);
        self.send_records_changed();

        Ok(self.records())
    }

    /// Appends the next page of records. Returns false if there are no more records.
    pub async fn load_next_page(&self) -> Result<bool> {
        let page_size = self.ctx.config.tracking_records_page_size;
        let Some(offset) = self.tracking_records_repo.next_page_offset(page_size) else {
            return Ok(false);
        };

        let user_id = self.ctx.current_backend_user_id()?;
        let records = self.tracking_service.load_records(&user_id, offset).await?;

        if records.is_empty() {
            return Ok(false);
        }

        self.tracking_records_repo.append_page(records);
        self.send_records_changed();
        Ok(true)
    }

    /// Returns all cached records, most recent first.
    pub fn records(&self) -> Vec<TrackingRecord> {
        self.tracking_records_repo.get_all()
    }

    pub fn record(&self, id: &TrackingRecordId) -> Option<TrackingRecord> {
        self.tracking_records_repo.get(id)
    }
}

impl JournalService {
    /// Inserts the record optimistically and swaps it for the confirmed version once the
    /// server responded. The optimistic record is removed again if the request fails.
    pub async fn create_record(
        &self,
        request: CreateTrackingRecordRequest,
    ) -> Result<TrackingRecord, TrackingError> {
        let new_record = NewTrackingRecord {
            user_id: self.ctx.current_backend_user_id()?,
            tracking_type_id: request.tracking_type_id,
            event_at: request
                .event_at
                .unwrap_or_else(|| self.time_provider.now()),
            note: request.note,
        };

        let temp_id = OptimisticRecordId::from(self.id_provider.new_id());
        let _guard = self.begin_mutation(TrackingRecordId::from(temp_id.clone()))?;

        self.tracking_records_repo
            .add(new_record.to_optimistic_record(temp_id.clone()));
        self.send_records_changed();

        match self.tracking_service.create_record(&new_record).await {
            Ok(record) => {
                info!("Created tracking record {}.", record.id);
                self.tracking_records_repo
                    .replace_optimistic(&temp_id, record.clone());
                self.send_records_changed();
                self.send_success("Your tracking entry has been saved!");
                Ok(record)
            }
            Err(err) => {
                error!("Failed to create tracking record. {err}");
                self.tracking_records_repo
                    .remove(&TrackingRecordId::Optimistic(temp_id));
                self.send_records_changed();
                self.send_error("Failed to save tracking entry");
                Err(err.into())
            }
        }
    }

    /// Applies `change` to the cached record before sending it to the server. The cached
    /// record is restored if the request fails.
    pub async fn update_record(
        &self,
        id: &TrackingRecordId,
        change: TrackingRecordChange,
    ) -> Result<TrackingRecord, TrackingError> {
        let remote_id = Self::confirmed_id(id)?;
        let _guard = self.begin_mutation(id.clone())?;

        let snapshot = self
            .tracking_records_repo
            .get(id)
            .ok_or_else(|| TrackingError::NotFound { id: id.clone() })?;

        let updated_record = change.apply_to(&snapshot);
        self.tracking_records_repo.update(updated_record.clone());
        self.send_records_changed();

        match self.tracking_service.update_record(remote_id, &change).await {
            Ok(()) => {
                info!("Updated tracking record {id}.");
                self.send_success("Your tracking entry has been updated!");
                Ok(updated_record)
            }
            Err(err) => {
                error!("Failed to update tracking record {id}. {err}");
                self.tracking_records_repo.update(snapshot);
                self.send_records_changed();
                self.send_error("Failed to update tracking entry");
                Err(err.into())
            }
        }
    }

    /// Removes the cached record before deleting it on the server. The record is inserted
    /// again if the request fails.
    pub async fn delete_record(&self, id: &TrackingRecordId) -> Result<(), TrackingError> {
        let remote_id = Self::confirmed_id(id)?;
        let _guard = self.begin_mutation(id.clone())?;

        let snapshot = self
            .tracking_records_repo
            .remove(id)
            .ok_or_else(|| TrackingError::NotFound { id: id.clone() })?;
        self.send_records_changed();

        match self.tracking_service.delete_record(remote_id).await {
            Ok(()) => {
                info!("Deleted tracking record {id}.");
                self.send_success("Tracking entry has been deleted!");
                Ok(())
            }
            Err(err) => {
                error!("Failed to delete tracking record {id}. {err}");
                self.tracking_records_repo.add(snapshot);
                self.send_records_changed();
                self.send_error("Failed to delete tracking entry");
                Err(err.into())
            }
        }
    }
}

impl JournalService {
    fn confirmed_id(id: &TrackingRecordId) -> Result<i64, TrackingError> {
        id.confirmed()
            .ok_or_else(|| TrackingError::NotConfirmed { id: id.clone() })
    }

    fn begin_mutation(&self, id: TrackingRecordId) -> Result<MutationGuard<'_>, TrackingError> {
        if !self.records_in_flight.lock().insert(id.clone()) {
            return Err(TrackingError::MutationInFlight { id });
        }
        Ok(MutationGuard {
            records_in_flight: &self.records_in_flight,
            id,
        })
    }

    fn send_success(&self, message: &str) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ToastRequested {
                toast: Toast::success(message),
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::AnalyticsInvalidated);
    }

    fn send_error(&self, message: &str) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ToastRequested {
                toast: Toast::error(message),
            });
    }

    fn send_records_changed(&self) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::TrackingRecordsChanged);
    }
}

struct MutationGuard<'a> {
    records_in_flight: &'a Mutex<HashSet<TrackingRecordId>>,
    id: TrackingRecordId,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.records_in_flight.lock().remove(&self.id);
    }
}
