//! Document domain model.
//!
//! # Responsibility
//! - Define the canonical document record and its author value object.
//! - Provide explicit constructors for the new-document and import/update
//!   paths instead of builder chains.
//!
//! # Invariants
//! - `id` is stable once assigned and never reused for another document.
//! - `created` is stamped exactly once, on first save of a new document.
//! - A document without an `id` has never been stored.

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Generated ids are UUID v4 strings, but the contract is plain string
/// identity so externally-minted ids survive the update path untouched.
pub type DocumentId = String;

/// Identity and display name attached to every document.
///
/// Immutable value object; two authors are the same author iff their `id`
/// values are equal, whatever the display name says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable author identity used by search filters.
    pub id: String,
    /// Human-readable display name. Not used for matching.
    pub name: String,
}

impl Author {
    /// Creates an author value from identity and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Canonical document record.
///
/// `id` and `created` stay `None` until the repository assigns them on the
/// first save. On the update path both fields are taken verbatim from the
/// caller; the repository never merges with the previously stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable global id. `None` (or empty) means "not stored yet".
    pub id: Option<DocumentId>,
    /// Display title. Matched by prefix filters.
    pub title: String,
    /// Body text. Matched by substring filters.
    pub content: String,
    /// Document author. `author.id` is matched by author filters.
    pub author: Author,
    /// Creation time in Unix epoch milliseconds. Stamped on first save.
    pub created: Option<i64>,
}

impl Document {
    /// Creates a draft document with no id and no creation timestamp.
    ///
    /// The repository assigns both on the first save.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    /// Creates a document with a caller-provided id and timestamp.
    ///
    /// Used by update and import paths where identity already exists. The
    /// repository stores `created` exactly as given here, including `None`.
    pub fn with_id(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: Option<i64>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Returns whether this document already carries a usable identity.
    ///
    /// Only an absent or empty-string id counts as "not stored yet". Any
    /// other value, whitespace included, is caller-minted identity that the
    /// save path keeps verbatim.
    pub fn has_id(&self) -> bool {
        matches!(&self.id, Some(id) if !id.is_empty())
    }
}
