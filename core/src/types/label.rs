use nutype::nutype;

pub const MAX_LABEL_LENGTH: usize = 64;

/// Category applied to drafts that do not name one.
pub(crate) const FALLBACK_CATEGORY: &str = "Personal";

/// Free-form cross-cutting label attached to an item.
///
/// Compared case-sensitively; an item's tag set collapses duplicates.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_LABEL_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Tag(String);

/// Coarse-grained grouping label; every item carries exactly one.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_LABEL_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Category(String);
