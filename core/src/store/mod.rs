//! In-memory item store: the authoritative collection plus derived indices.
//!
//! Design:
//! - Mutations (`add`, `update`, `remove`, `remove_many`) are synchronous and
//!   run to completion; a failed mutation leaves the collection exactly as it
//!   was.
//! - The tag/category indices are maintained incrementally on every mutation;
//!   `query` recomputes filter + sort over the full collection, which is
//!   bounded to a single user's saved items.
//! - Absent ids are an error only for `update`. Removal treats them as a
//!   normal outcome, since close/retry paths routinely remove items that are
//!   already gone.

use crate::types::{
    Category, CategoryFilter, Draft, Item, ItemId, Patch, Payload, Query, SortKey, StoreConfig,
    Tag, Title, TypeFilter,
};
use error::{StoreError, ValidationError};
use index::LabelIndex;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::time::SystemTime;
use tracing::debug;

pub(crate) mod index;

pub mod error {
    use crate::types::{ItemId, TitleError};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("validation error: {0}")]
        Validation(#[from] ValidationError),

        #[error("item not found: {0}")]
        NotFound(ItemId),

        #[error("item limit reached: {0}")]
        LimitReached(usize),
    }

    #[derive(Debug, Error)]
    pub enum ValidationError {
        #[error("invalid title: {0}")]
        Title(#[from] TitleError),

        #[error("link url must not be empty")]
        EmptyUrl,

        #[error("text body must not be empty")]
        EmptyBody,

        #[error("file name must not be empty")]
        EmptyFileName,
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Owns the saved-item collection and answers queries against it.
///
/// Single-threaded by design: callers hold it behind `&mut` and every
/// operation is atomic from their perspective. Durable mirroring, if any,
/// happens outside this boundary and must not fail the in-memory mutation.
pub struct ItemStore {
    config: StoreConfig,
    items: Vec<Item>,
    tag_index: LabelIndex<Tag>,
    category_index: LabelIndex<Category>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

/// Construction.
impl ItemStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            tag_index: LabelIndex::new(),
            category_index: LabelIndex::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

/// Read operations.
impl ItemStore {
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current tag index as (label, live-item count) pairs, ordered by
    /// descending count then ascending label.
    pub fn tags(&self) -> Vec<(Tag, usize)> {
        self.tag_index.entries()
    }

    /// Current category index, same shape and order as [`ItemStore::tags`].
    pub fn categories(&self) -> Vec<(Category, usize)> {
        self.category_index.entries()
    }
}

/// Mutation operations.
impl ItemStore {
    /// Validates the draft, assigns a fresh id, stamps both timestamps to
    /// `now` and inserts the item as most recent.
    pub fn add(&mut self, draft: Draft, now: SystemTime) -> Result<Item> {
        self.add_at(draft, now, now)
    }

    pub(crate) fn add_at(
        &mut self,
        draft: Draft,
        created_at: SystemTime,
        updated_at: SystemTime,
    ) -> Result<Item> {
        if let Some(limit) = self.config.item_limit {
            if self.items.len() >= limit {
                return Err(StoreError::LimitReached(limit));
            }
        }

        let title = Title::try_from(draft.title).map_err(ValidationError::from)?;
        validate_payload(&draft.payload)?;

        let category = draft
            .category
            .unwrap_or_else(|| self.config.fallback_category.clone());

        let item = Item {
            id: ItemId::generate(),
            title,
            payload: draft.payload,
            category,
            tags: normalize_tags(draft.tags),
            created_at,
            // created_at <= updated_at, whatever the caller recorded.
            updated_at: updated_at.max(created_at),
        };

        self.index_insert(&item);
        self.items.push(item.clone());

        debug!(id = %item.id, content_type = %item.content_type(), "item added");
        Ok(item)
    }

    /// Merges the patch over the stored item, re-validates the result with
    /// the same rules as [`ItemStore::add`] and stamps `updated_at`.
    ///
    /// Validation failure leaves the stored item untouched.
    pub fn update(&mut self, id: ItemId, patch: Patch, now: SystemTime) -> Result<Item> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        let previous = self.items[pos].clone();

        let title = match patch.title {
            Some(raw) => Title::try_from(raw).map_err(ValidationError::from)?,
            None => previous.title.clone(),
        };
        let payload = patch.payload.unwrap_or_else(|| previous.payload.clone());
        validate_payload(&payload)?;

        let updated = Item {
            id,
            title,
            payload,
            category: patch.category.unwrap_or_else(|| previous.category.clone()),
            tags: match patch.tags {
                Some(raw) => normalize_tags(raw),
                None => previous.tags.clone(),
            },
            created_at: previous.created_at,
            // updated_at never precedes created_at, even if the caller's
            // clock stepped backwards between calls.
            updated_at: now.max(previous.created_at),
        };

        self.index_remove(&previous);
        self.index_insert(&updated);
        self.items[pos] = updated.clone();

        debug!(id = %id, "item updated");
        Ok(updated)
    }

    /// Removes an item. Absent ids are a normal outcome (`false`), not an
    /// error.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let item = self.items.remove(pos);
        self.index_remove(&item);

        debug!(id = %id, "item removed");
        true
    }

    /// Removes every id present in the collection, skipping the rest.
    /// Returns the count actually removed; never fails.
    pub fn remove_many<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = ItemId>,
    {
        ids.into_iter().filter(|&id| self.remove(id)).count()
    }
}

/// Query operations.
impl ItemStore {
    /// Filtered, sorted projection of the collection. Pure: store state is
    /// untouched and the results are owned copies.
    pub fn query(&self, query: &Query) -> Vec<Item> {
        let mut results: Vec<Item> = self
            .items
            .iter()
            .filter(|item| matches(item, query))
            .cloned()
            .collect();

        results.sort_by(|a, b| compare(a, b, query.sort));
        results
    }
}

/// Index maintenance.
impl ItemStore {
    fn index_insert(&mut self, item: &Item) {
        for tag in &item.tags {
            self.tag_index.increment(tag.clone());
        }
        self.category_index.increment(item.category.clone());
    }

    fn index_remove(&mut self, item: &Item) {
        for tag in &item.tags {
            self.tag_index.decrement(tag);
        }
        self.category_index.decrement(&item.category);
    }
}

fn validate_payload(payload: &Payload) -> std::result::Result<(), ValidationError> {
    match payload {
        Payload::Link { url } if url.trim().is_empty() => Err(ValidationError::EmptyUrl),
        Payload::Text { body } if body.trim().is_empty() => Err(ValidationError::EmptyBody),
        _ => match payload.file_ref() {
            Some(file) if file.name.trim().is_empty() => Err(ValidationError::EmptyFileName),
            _ => Ok(()),
        },
    }
}

/// Trims labels, drops empties and over-long ones, collapses duplicates.
fn normalize_tags(raw: Vec<String>) -> BTreeSet<Tag> {
    raw.into_iter()
        .filter_map(|label| Tag::try_from(label).ok())
        .collect()
}

fn matches(item: &Item, query: &Query) -> bool {
    if let Some(text) = query.search_text.as_deref() {
        if !text.is_empty() && !matches_search(item, text) {
            return false;
        }
    }

    if let CategoryFilter::Only(category) = &query.category {
        if item.category != *category {
            return false;
        }
    }

    if !query.tags.iter().all(|tag| item.tags.contains(tag)) {
        return false;
    }

    if let TypeFilter::Only(content_type) = query.content_type {
        if item.content_type() != content_type {
            return false;
        }
    }

    true
}

fn matches_search(item: &Item, text: &str) -> bool {
    let needle = text.to_lowercase();

    if item.title.to_lowercase().contains(&needle) {
        return true;
    }
    if let Some(body) = item.payload.text_body() {
        if body.to_lowercase().contains(&needle) {
            return true;
        }
    }
    item.tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(&needle))
}

fn compare(a: &Item, b: &Item, sort: SortKey) -> Ordering {
    let primary = match sort {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::Oldest => a.created_at.cmp(&b.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Type => a.content_type().as_str().cmp(b.content_type().as_str()),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}
