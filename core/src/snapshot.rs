//! JSON import/export of the full collection.
//!
//! The document is an array of item-shaped records. Import feeds every
//! record through the store's own validation individually; records that fail
//! are skipped and counted, never aborting the rest of the document.

use crate::store::ItemStore;
use crate::types::{Category, Draft, Item, Payload, Query};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::time::SystemTime;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One record of the export document.
///
/// Ids are deliberately absent: the store reassigns them on import, which
/// keeps the id-uniqueness invariant structural.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<SystemTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<SystemTime>,
}

impl ItemRecord {
    fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.to_string(),
            payload: item.payload.clone(),
            category: Some(item.category.clone()),
            tags: item.tags.iter().map(|tag| tag.to_string()).collect(),
            created_at: Some(item.created_at),
            updated_at: Some(item.updated_at),
        }
    }
}

/// Counts reported by [`ItemStore::import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

/// Import/export operations.
impl ItemStore {
    /// The collection as export records, newest first (the default query
    /// view).
    pub fn export_records(&self) -> Vec<ItemRecord> {
        self.query(&Query::default())
            .iter()
            .map(ItemRecord::from_item)
            .collect()
    }

    /// Imports records one at a time through `add`'s validation.
    ///
    /// Recorded timestamps are honored when present, otherwise `now` is
    /// used. Records failing validation (or exceeding the item limit) are
    /// skipped and counted.
    pub fn import<I>(&mut self, records: I, now: SystemTime) -> ImportOutcome
    where
        I: IntoIterator<Item = ItemRecord>,
    {
        let mut outcome = ImportOutcome::default();

        for record in records {
            let created_at = record.created_at.unwrap_or(now);
            let updated_at = record.updated_at.unwrap_or(created_at);

            let draft = Draft {
                title: record.title,
                payload: record.payload,
                category: record.category,
                tags: record.tags,
            };

            match self.add_at(draft, created_at, updated_at) {
                Ok(_) => outcome.imported += 1,
                Err(_) => outcome.skipped += 1,
            }
        }

        info!(
            imported = outcome.imported,
            skipped = outcome.skipped,
            "snapshot import finished"
        );
        outcome
    }
}

/// Writes the store's export records as a pretty-printed JSON array.
pub fn write_json<W: Write>(store: &ItemStore, writer: W) -> Result<(), SnapshotError> {
    serde_json::to_writer_pretty(writer, &store.export_records())?;
    Ok(())
}

/// Reads an export document back into records, ready for
/// [`ItemStore::import`].
pub fn read_json<R: Read>(reader: R) -> Result<Vec<ItemRecord>, SnapshotError> {
    Ok(serde_json::from_reader(reader)?)
}
