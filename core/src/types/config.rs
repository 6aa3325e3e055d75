use super::label::{Category, FALLBACK_CATEGORY};

/// Store tunables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Category applied to drafts that do not name one.
    pub fallback_category: Category,
    /// Maximum number of live items; `None` disables the cap.
    pub item_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let fallback_category =
            Category::try_from(FALLBACK_CATEGORY).expect("fallback category label is valid");

        Self {
            fallback_category,
            item_limit: None,
        }
    }
}
