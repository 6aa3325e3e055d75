use super::content::{ContentType, Payload};
use super::id::ItemId;
use super::label::{Category, Tag};
use super::title::Title;
use std::collections::BTreeSet;
use std::time::SystemTime;

/// A saved piece of content.
///
/// Invariants held by the store: `id` is unique in the collection,
/// `created_at <= updated_at`, and `tags` is duplicate-free by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: Title,
    pub payload: Payload,
    pub category: Category,
    pub tags: BTreeSet<Tag>,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Item {
    pub fn content_type(&self) -> ContentType {
        self.payload.content_type()
    }
}

/// Caller input to `ItemStore::add`.
#[derive(Debug, Clone)]
pub struct Draft {
    pub title: String,
    pub payload: Payload,
    /// `None` gets the store's fallback category.
    pub category: Option<Category>,
    /// Raw labels; trimmed, empties dropped, duplicates collapsed.
    pub tags: Vec<String>,
}

impl Draft {
    pub fn new(title: impl Into<String>, payload: Payload) -> Self {
        Self {
            title: title.into(),
            payload,
            category: None,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for `ItemStore::update`; absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub title: Option<String>,
    pub payload: Option<Payload>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
}
