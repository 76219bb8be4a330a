//! Document use-case service.
//!
//! # Responsibility
//! - Provide stable save/lookup/search entry points for core callers.
//! - Delegate storage to repository implementations and emit metadata-only
//!   diagnostic events.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Log events carry ids and counts only, never document content.

use crate::model::document::{Author, Document};
use crate::repo::document_repo::{DocumentRepository, RepoResult};
use crate::search::filter::{search_documents, SearchRequest, SearchResult};
use log::debug;

/// Use-case service wrapper around a document repository.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Upserts one document and returns the stored record.
    ///
    /// # Contract
    /// - Drafts without an id come back with a generated id and a fresh
    ///   creation timestamp.
    /// - Records with an id replace the previous entry verbatim.
    pub fn save(&mut self, document: Document) -> RepoResult<Document> {
        let had_id = document.has_id();
        let saved = self.repo.save_document(document)?;
        debug!(
            "event=document_saved module=service status=ok id={} path={}",
            saved.id.as_deref().unwrap_or(""),
            if had_id { "update" } else { "create" }
        );
        Ok(saved)
    }

    /// Creates and stores a new document from its parts.
    ///
    /// # Contract
    /// - Always takes the create path; id and `created` are assigned here.
    pub fn create_document(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> RepoResult<Document> {
        self.save(Document::new(title, content, author))
    }

    /// Gets one document by exact id match.
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Document>> {
        self.repo.find_by_id(id)
    }

    /// Filters stored documents through a conjunctive search request.
    ///
    /// Results keep the store's insertion order.
    pub fn search(&self, request: &SearchRequest) -> SearchResult<Vec<Document>> {
        let hits = search_documents(&self.repo, request)?;
        debug!(
            "event=document_search module=service status=ok hits={}",
            hits.len()
        );
        Ok(hits)
    }

    /// Lists every stored document in insertion order.
    pub fn list(&self) -> RepoResult<Vec<Document>> {
        self.repo.list_documents()
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentService;
    use crate::model::document::Author;
    use crate::repo::document_repo::InMemoryDocumentRepository;
    use crate::search::filter::SearchRequest;

    #[test]
    fn create_then_find_roundtrip() {
        let mut service = DocumentService::new(InMemoryDocumentRepository::new());
        let saved = service
            .create_document("Title", "body", Author::new("a1", "Ada"))
            .unwrap();

        let id = saved.id.as_deref().expect("id should be assigned");
        let loaded = service.find_by_id(id).unwrap().expect("should exist");
        assert_eq!(loaded, saved);
    }

    #[test]
    fn search_delegates_to_filter() {
        let mut service = DocumentService::new(InMemoryDocumentRepository::new());
        service
            .create_document("Alpha", "one", Author::new("a1", "Ada"))
            .unwrap();
        service
            .create_document("Beta", "two", Author::new("a2", "Bob"))
            .unwrap();

        let request = SearchRequest {
            title_prefixes: Some(vec!["Al".to_string()]),
            ..SearchRequest::default()
        };
        let hits = service.search(&request).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alpha");
    }
}
