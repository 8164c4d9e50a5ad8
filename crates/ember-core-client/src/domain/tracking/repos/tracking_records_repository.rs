// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::tracking::models::{
    OptimisticRecordId, TrackingRecord, TrackingRecordId, TrackingRecordsPage,
};

/// The paginated, client-side copy of the user's tracking records. Records are ordered by
/// `event_at`, most recent first.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TrackingRecordsRepository: Send + Sync {
    /// Drops all pages and stores `records` as page 0.
    fn set_first_page(&self, records: Vec<TrackingRecord>);
    fn append_page(&self, records: Vec<TrackingRecord>);

    fn pages(&self) -> Vec<TrackingRecordsPage>;
    fn get_all(&self) -> Vec<TrackingRecord>;
    fn get(&self, id: &TrackingRecordId) -> Option<TrackingRecord>;

    /// Returns the offset of the next page if the last loaded page is full.
    fn next_page_offset(&self, page_size: usize) -> Option<u32>;

    /// Inserts `record` at the position given by its `event_at`. A record with the same id
    /// is replaced.
    fn add(&self, record: TrackingRecord);

    /// Swaps the optimistic record `temp_id` for its confirmed version.
    fn replace_optimistic(&self, temp_id: &OptimisticRecordId, record: TrackingRecord);

    /// Replaces the record with the same id in place. Returns false if no such record exists.
    fn update(&self, record: TrackingRecord) -> bool;

    fn remove(&self, id: &TrackingRecordId) -> Option<TrackingRecord>;

    fn clear_cache(&self);
}
