// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use new_tracking_record::NewTrackingRecord;
pub use tracking_error::TrackingError;
pub use tracking_record::{OptimisticRecordId, TrackingRecord, TrackingRecordId, TrackingTypeId};
pub use tracking_record_change::TrackingRecordChange;
pub use tracking_records_page::TrackingRecordsPage;

mod new_tracking_record;
mod tracking_error;
mod tracking_record;
mod tracking_record_change;
mod tracking_records_page;
