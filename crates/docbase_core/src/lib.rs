//! Core domain logic for docbase, an in-memory document repository.
//! This crate is the single source of truth for upsert, lookup and search
//! contracts.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Author, Document, DocumentId};
pub use repo::document_repo::{
    now_epoch_ms, DocumentRepository, InMemoryDocumentRepository, RepoError, RepoResult,
};
pub use search::filter::{
    matches_request, search_documents, SearchError, SearchRequest, SearchResult,
};
pub use service::document_service::DocumentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
