pub(crate) mod config;
pub use config::StoreConfig;

pub(crate) mod content;
pub use content::{ContentType, FileRef, Payload};

pub(crate) mod id;
pub use id::ItemId;

pub(crate) mod item;
pub use item::{Draft, Item, Patch};

pub(crate) mod label;
pub use label::{Category, CategoryError, MAX_LABEL_LENGTH, Tag, TagError};

pub(crate) mod query;
pub use query::{CategoryFilter, Query, SortKey, TypeFilter};

pub(crate) mod title;
pub use title::{MAX_TITLE_LENGTH, Title, TitleError};
