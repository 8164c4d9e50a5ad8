// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::tracking::models::TrackingRecord;

/// A page of records as loaded from the server. `offset` is the index of the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackingRecordsPage {
    pub offset: u32,
    pub records: Vec<TrackingRecord>,
}
