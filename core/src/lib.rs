//! In-memory core of a "save anything, organize later" content collection:
//! the authoritative item store, its derived tag/category indices and the
//! filter/sort query pipeline the presentation layer renders from.

pub mod snapshot;
pub mod store;
pub mod types;

pub use snapshot::{ImportOutcome, ItemRecord, SnapshotError};
pub use store::error::{StoreError, ValidationError};
pub use store::{ItemStore, Result};
