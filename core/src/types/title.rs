use nutype::nutype;

pub const MAX_TITLE_LENGTH: usize = 512;

/// Display title of an item. Trimmed, never empty.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_TITLE_LENGTH),
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
pub struct Title(String);
