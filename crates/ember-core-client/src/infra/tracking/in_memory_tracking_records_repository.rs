// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::tracking::models::{
    OptimisticRecordId, TrackingRecord, TrackingRecordId, TrackingRecordsPage,
};
use crate::domain::tracking::repos::TrackingRecordsRepository;

#[derive(Default)]
pub struct InMemoryTrackingRecordsRepository {
    pages: RwLock<Vec<TrackingRecordsPage>>,
}

impl InMemoryTrackingRecordsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackingRecordsRepository for InMemoryTrackingRecordsRepository {
    fn set_first_page(&self, records: Vec<TrackingRecord>) {
        *self.pages.write() = vec![TrackingRecordsPage { offset: 0, records }];
    }

    fn append_page(&self, records: Vec<TrackingRecord>) {
        let mut pages = self.pages.write();
        let offset = pages.len() as u32;
        pages.push(TrackingRecordsPage { offset, records });
    }

    fn pages(&self) -> Vec<TrackingRecordsPage> {
        self.pages.read().clone()
    }

    fn get_all(&self) -> Vec<TrackingRecord> {
        self.pages
            .read()
            .iter()
            .flat_map(|page| page.records.iter().cloned())
            .collect()
    }

    fn get(&self, id: &TrackingRecordId) -> Option<TrackingRecord> {
        let pages = self.pages.read();
        position(&pages, id).map(|(page, idx)| pages[page].records[idx].clone())
    }

    fn next_page_offset(&self, page_size: usize) -> Option<u32> {
        let pages = self.pages.read();
        match pages.last() {
            None => Some(0),
            Some(page) if page.records.len() >= page_size => Some(pages.len() as u32),
            Some(_) => None,
        }
    }

    fn add(&self, record: TrackingRecord) {
        let mut pages = self.pages.write();
        remove_record(&mut pages, &record.id);
        insert_sorted(&mut pages, record);
    }

    fn replace_optimistic(&self, temp_id: &OptimisticRecordId, record: TrackingRecord) {
        let mut pages = self.pages.write();
        let temp_id = TrackingRecordId::Optimistic(temp_id.clone());

        match (position(&pages, &temp_id), position(&pages, &record.id)) {
            (Some(temp_pos), None) => replace_at(&mut pages, temp_pos, record),
            (Some(_), Some(_)) => {
                remove_record(&mut pages, &temp_id);
                if let Some(pos) = position(&pages, &record.id) {
                    replace_at(&mut pages, pos, record);
                }
            }
            (None, Some(pos)) => replace_at(&mut pages, pos, record),
            (None, None) => insert_sorted(&mut pages, record),
        }
    }

    fn update(&self, record: TrackingRecord) -> bool {
        let mut pages = self.pages.write();
        let Some((page, idx)) = position(&pages, &record.id) else {
            return false;
        };
        pages[page].records[idx] = record;
        true
    }

    fn remove(&self, id: &TrackingRecordId) -> Option<TrackingRecord> {
        remove_record(&mut self.pages.write(), id)
    }

    fn clear_cache(&self) {
        self.pages.write().clear();
    }
}

fn position(pages: &[TrackingRecordsPage], id: &TrackingRecordId) -> Option<(usize, usize)> {
    pages.iter().enumerate().find_map(|(page_idx, page)| {
        page.records
            .iter()
            .position(|record| &record.id == id)
            .map(|idx| (page_idx, idx))
    })
}

fn remove_record(
    pages: &mut [TrackingRecordsPage],
    id: &TrackingRecordId,
) -> Option<TrackingRecord> {
    let (page, idx) = position(pages, id)?;
    Some(pages[page].records.remove(idx))
}

/// Replaces the record at `pos`. The record only moves if its `event_at` changed.
fn replace_at(pages: &mut Vec<TrackingRecordsPage>, pos: (usize, usize), record: TrackingRecord) {
    let (page, idx) = pos;
    if pages[page].records[idx].event_at == record.event_at {
        pages[page].records[idx] = record;
        return;
    }
    pages[page].records.remove(idx);
    insert_sorted(pages, record);
}

/// Inserts `record` in front of the first record that happened before it. Records with the
/// same `event_at` keep their relative order.
fn insert_sorted(pages: &mut Vec<TrackingRecordsPage>, record: TrackingRecord) {
    let insert_pos = pages.iter().enumerate().find_map(|(page_idx, page)| {
        page.records
            .iter()
            .position(|existing| existing.event_at < record.event_at)
            .map(|idx| (page_idx, idx))
    });

    if let Some((page, idx)) = insert_pos {
        pages[page].records.insert(idx, record);
        return;
    }

    match pages.last_mut() {
        Some(page) => page.records.push(record),
        None => pages.push(TrackingRecordsPage {
            offset: 0,
            records: vec![record],
        }),
    }
}
