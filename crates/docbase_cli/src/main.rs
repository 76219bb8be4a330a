//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docbase_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use docbase_core::{Author, DocumentService, InMemoryDocumentRepository, SearchRequest};

fn main() {
    println!("docbase_core version={}", docbase_core::core_version());

    // Tiny end-to-end probe: store one document, look it up, search for it.
    let mut service = DocumentService::new(InMemoryDocumentRepository::new());
    let saved = match service.create_document(
        "Smoke test",
        "hello from the docbase cli",
        Author::new("cli", "CLI Probe"),
    ) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("save failed: {err}");
            std::process::exit(1);
        }
    };

    let id = saved.id.as_deref().unwrap_or("");
    let found = matches!(service.find_by_id(id), Ok(Some(_)));
    let request = SearchRequest {
        contains_contents: Some(vec!["hello".to_string()]),
        ..SearchRequest::default()
    };
    let hits = service.search(&request).map(|docs| docs.len()).unwrap_or(0);

    println!("docbase_core save id={id}");
    println!("docbase_core find_by_id hit={found}");
    println!("docbase_core search hits={hits}");
}
