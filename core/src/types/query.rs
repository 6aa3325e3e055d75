use super::content::ContentType;
use super::label::{Category, Tag};

/// Sort order for query results. Ties always break by `id` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// `created_at` descending.
    #[default]
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// Case-insensitive title, ascending.
    Title,
    /// Content-type name, ascending.
    Type,
}

#[derive(Debug, Clone, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

#[derive(Debug, Clone, Copy, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ContentType),
}

/// Filter and sort parameters for `ItemStore::query`.
///
/// Filters are conjunctive: an item must pass every one to appear in the
/// result. `Query::default()` matches everything, newest first.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Case-insensitive substring against title, text body and tag labels;
    /// an item matches if any of those contains it. Empty matches all.
    pub search_text: Option<String>,
    pub category: CategoryFilter,
    /// Required tags; an item must carry every one of them.
    pub tags: Vec<Tag>,
    pub content_type: TypeFilter,
    pub sort: SortKey,
}

impl Query {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn of_type(mut self, content_type: ContentType) -> Self {
        self.content_type = TypeFilter::Only(content_type);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}
