//! Document repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the upsert/lookup/list API over the canonical document
//!   collection.
//! - Own id generation and creation-timestamp stamping for new documents.
//!
//! # Invariants
//! - At most one stored document per id at any time.
//! - Iteration order is insertion order; an upserted document moves to the
//!   end of that order.
//! - Stored entries always carry a non-empty id; the optional `id` on the
//!   public model is resolved at the store boundary.
//! - Single-threaded by construction: mutation requires exclusive ownership
//!   (`&mut self`), callers needing concurrency must wrap the store in their
//!   own lock or single-owner task.

use crate::model::document::{Author, Document, DocumentId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for document lookup and mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A blank (empty or whitespace-only) id was passed to a lookup.
    BlankId,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "document id must not be blank"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for document upsert and lookup.
pub trait DocumentRepository {
    /// Upserts one document and returns the stored record.
    ///
    /// Documents without a usable id get a generated id and a fresh
    /// creation timestamp; documents with an id replace any previous entry
    /// verbatim, `created` included.
    fn save_document(&mut self, document: Document) -> RepoResult<Document>;

    /// Finds one document by exact id match.
    ///
    /// Absence is `Ok(None)`; a blank id is a contract violation and fails
    /// with [`RepoError::BlankId`].
    fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>>;

    /// Lists all stored documents in insertion order.
    fn list_documents(&self) -> RepoResult<Vec<Document>>;
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Saturates at zero for clocks set before the epoch instead of failing;
/// the repository has no meaningful recovery from a broken system clock.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Stored shape of a document.
///
/// The id is non-optional here: resolving the public model's optional id
/// happens once at the save boundary, so every read path can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredDocument {
    id: DocumentId,
    title: String,
    content: String,
    author: Author,
    created: Option<i64>,
}

impl StoredDocument {
    fn from_parts(id: DocumentId, document: Document) -> Self {
        Self {
            id,
            title: document.title,
            content: document.content,
            author: document.author,
            created: document.created,
        }
    }

    fn to_document(&self) -> Document {
        Document {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            created: self.created,
        }
    }
}

/// In-memory, insertion-ordered document repository.
///
/// The sole store implementation: one exclusively owned `Vec`, no interior
/// mutability, no persistence. Suited for process-lifetime state and tests.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    entries: Vec<StoredDocument>,
}

impl InMemoryDocumentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn save_document(&mut self, document: Document) -> RepoResult<Document> {
        let (id, document) = if document.has_id() {
            // Update path: the incoming record is stored verbatim. `created`
            // is deliberately not merged from the previous entry; callers
            // who need to preserve it must fetch-then-merge before saving.
            let id = document.id.clone().unwrap_or_default();
            (id, document)
        } else {
            let mut document = document;
            let id = Uuid::new_v4().to_string();
            document.id = Some(id.clone());
            // New-document path always stamps current time, discarding any
            // caller-supplied value.
            document.created = Some(now_epoch_ms());
            (id, document)
        };

        self.entries.retain(|entry| entry.id != id);
        let stored = StoredDocument::from_parts(id, document);
        let saved = stored.to_document();
        self.entries.push(stored);
        Ok(saved)
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>> {
        if id.trim().is_empty() {
            return Err(RepoError::BlankId);
        }

        Ok(self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map(StoredDocument::to_document))
    }

    fn list_documents(&self) -> RepoResult<Vec<Document>> {
        Ok(self.entries.iter().map(StoredDocument::to_document).collect())
    }
}
