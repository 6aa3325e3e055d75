use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to an uploaded file. The bytes themselves live with the
/// out-of-scope storage collaborator; the store only tracks name and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
}

/// Discriminant of the closed content-type set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Link,
    Text,
    Image,
    Video,
    Voice,
    File,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Link,
        ContentType::Text,
        ContentType::Image,
        ContentType::Video,
        ContentType::Voice,
        ContentType::File,
    ];

    /// Canonical lowercase name; also the "type" sort key, so ordering does
    /// not depend on variant declaration order.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Link => "link",
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Voice => "voice",
            ContentType::File => "file",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-dependent content of an item.
///
/// The variant is the content type; each carries only the fields valid for
/// it, so shape mismatches are unrepresentable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum Payload {
    Link { url: String },
    Text { body: String },
    Image { file: FileRef },
    Video { file: FileRef },
    Voice { file: FileRef },
    File { file: FileRef },
}

impl Payload {
    pub fn content_type(&self) -> ContentType {
        match self {
            Payload::Link { .. } => ContentType::Link,
            Payload::Text { .. } => ContentType::Text,
            Payload::Image { .. } => ContentType::Image,
            Payload::Video { .. } => ContentType::Video,
            Payload::Voice { .. } => ContentType::Voice,
            Payload::File { .. } => ContentType::File,
        }
    }

    /// Free-text body, present only for text items. The search pipeline
    /// matches against it.
    pub fn text_body(&self) -> Option<&str> {
        match self {
            Payload::Text { body } => Some(body),
            _ => None,
        }
    }

    pub fn file_ref(&self) -> Option<&FileRef> {
        match self {
            Payload::Image { file }
            | Payload::Video { file }
            | Payload::Voice { file }
            | Payload::File { file } => Some(file),
            _ => None,
        }
    }
}
