//! Conjunctive document filtering.
//!
//! # Responsibility
//! - Define the multi-criteria search request shape.
//! - Evaluate it as a linear scan over the repository, preserving insertion
//!   order.
//!
//! # Invariants
//! - Criteria combine with AND across fields and OR within a list field.
//! - Absent or empty criteria are vacuously satisfied, never "match nothing".
//! - Date bounds are inclusive on both ends.

use crate::model::document::{Document, DocumentId};
use crate::repo::document_repo::{DocumentRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for filter evaluation and repository access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A date-range criterion hit a stored document that was saved without
    /// a creation timestamp (possible on the verbatim update path).
    MissingCreated { id: DocumentId },
    /// Repository-layer failure.
    Repo(RepoError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCreated { id } => write!(
                f,
                "document `{id}` has no creation timestamp; date-range filters cannot be applied"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingCreated { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SearchError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Conjunctive filter specification over document fields.
///
/// Every field is independently optional; `None` (or an empty list) puts no
/// constraint on the result. The zero-value request therefore matches every
/// stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Title matches when it starts with any listed prefix.
    pub title_prefixes: Option<Vec<String>>,
    /// Content matches when it contains any listed substring.
    pub contains_contents: Option<Vec<String>>,
    /// Author matches when `author.id` equals any listed id.
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on `created`, epoch milliseconds.
    pub created_from: Option<i64>,
    /// Inclusive upper bound on `created`, epoch milliseconds.
    pub created_to: Option<i64>,
}

impl SearchRequest {
    /// Creates an unconstrained request that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any date-range criterion is active.
    pub fn has_date_filter(&self) -> bool {
        self.created_from.is_some() || self.created_to.is_some()
    }
}

/// Filters all stored documents through `request`.
///
/// Returns matches in the repository's insertion order. An empty result is
/// `Ok(vec![])`, never an error.
pub fn search_documents<R: DocumentRepository>(
    repo: &R,
    request: &SearchRequest,
) -> SearchResult<Vec<Document>> {
    let mut hits = Vec::new();
    for document in repo.list_documents()? {
        if matches_request(&document, request)? {
            hits.push(document);
        }
    }
    Ok(hits)
}

/// Evaluates one document against every active criterion.
pub fn matches_request(document: &Document, request: &SearchRequest) -> SearchResult<bool> {
    if let Some(prefixes) = active_list(&request.title_prefixes) {
        if !prefixes
            .iter()
            .any(|prefix| document.title.starts_with(prefix.as_str()))
        {
            return Ok(false);
        }
    }

    if let Some(needles) = active_list(&request.contains_contents) {
        if !needles
            .iter()
            .any(|needle| document.content.contains(needle.as_str()))
        {
            return Ok(false);
        }
    }

    if let Some(author_ids) = active_list(&request.author_ids) {
        if !author_ids.iter().any(|id| document.author.id == *id) {
            return Ok(false);
        }
    }

    if request.has_date_filter() {
        let created = created_or_fail(document)?;
        if let Some(from) = request.created_from {
            if created < from {
                return Ok(false);
            }
        }
        if let Some(to) = request.created_to {
            if created > to {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn active_list(field: &Option<Vec<String>>) -> Option<&[String]> {
    field
        .as_deref()
        .filter(|values| !values.is_empty())
}

fn created_or_fail(document: &Document) -> SearchResult<i64> {
    document.created.ok_or_else(|| SearchError::MissingCreated {
        id: document.id.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::{matches_request, SearchError, SearchRequest};
    use crate::model::document::{Author, Document};

    fn doc(title: &str, content: &str, author_id: &str, created: Option<i64>) -> Document {
        Document::with_id(
            "doc-1",
            title,
            content,
            Author::new(author_id, "Ada"),
            created,
        )
    }

    #[test]
    fn zero_value_request_matches_everything() {
        let request = SearchRequest::new();
        assert!(matches_request(&doc("T", "c", "a1", Some(5)), &request).unwrap());
        // Even a document without a timestamp, since no date filter is active.
        assert!(matches_request(&doc("T", "c", "a1", None), &request).unwrap());
    }

    #[test]
    fn title_prefix_is_anchored_at_the_start() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["Foo".to_string()]),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("Foobar", "c", "a1", Some(5)), &request).unwrap());
        assert!(!matches_request(&doc("barFoo", "c", "a1", Some(5)), &request).unwrap());
    }

    #[test]
    fn any_prefix_in_the_list_is_enough() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["X".to_string(), "Foo".to_string()]),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("Foobar", "c", "a1", Some(5)), &request).unwrap());
    }

    #[test]
    fn content_match_is_substring_anywhere() {
        let request = SearchRequest {
            contains_contents: Some(vec!["hello".to_string()]),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("T", "say hello world", "a1", Some(5)), &request).unwrap());
        assert!(!matches_request(&doc("T", "goodbye", "a1", Some(5)), &request).unwrap());
    }

    #[test]
    fn author_match_is_exact_id_equality() {
        let request = SearchRequest {
            author_ids: Some(vec!["a1".to_string()]),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("T", "c", "a1", Some(5)), &request).unwrap());
        assert!(!matches_request(&doc("T", "c", "a10", Some(5)), &request).unwrap());
    }

    #[test]
    fn empty_list_criteria_are_skipped() {
        let request = SearchRequest {
            title_prefixes: Some(Vec::new()),
            contains_contents: Some(Vec::new()),
            author_ids: Some(Vec::new()),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("T", "c", "a1", Some(5)), &request).unwrap());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let request = SearchRequest {
            created_from: Some(100),
            created_to: Some(200),
            ..SearchRequest::default()
        };
        assert!(matches_request(&doc("T", "c", "a1", Some(100)), &request).unwrap());
        assert!(matches_request(&doc("T", "c", "a1", Some(200)), &request).unwrap());
        assert!(!matches_request(&doc("T", "c", "a1", Some(99)), &request).unwrap());
        assert!(!matches_request(&doc("T", "c", "a1", Some(201)), &request).unwrap());
    }

    #[test]
    fn date_filter_over_missing_created_fails_fast() {
        let request = SearchRequest {
            created_from: Some(100),
            ..SearchRequest::default()
        };
        let err = matches_request(&doc("T", "c", "a1", None), &request).unwrap_err();
        assert!(matches!(err, SearchError::MissingCreated { id } if id == "doc-1"));
    }

    #[test]
    fn criteria_combine_with_and_across_fields() {
        let request = SearchRequest {
            title_prefixes: Some(vec!["X".to_string()]),
            author_ids: Some(vec!["a1".to_string()]),
            ..SearchRequest::default()
        };
        // Matches author but not title prefix.
        assert!(!matches_request(&doc("T", "c", "a1", Some(5)), &request).unwrap());
        assert!(matches_request(&doc("X-ray", "c", "a1", Some(5)), &request).unwrap());
    }
}
