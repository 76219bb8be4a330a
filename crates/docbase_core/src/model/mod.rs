//! Domain model for the document repository.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one document-centric shape shared by repository, search and
//!   service layers.
//!
//! # Invariants
//! - Every stored document is identified by a stable `DocumentId` string.
//! - Creation timestamps are epoch milliseconds, assigned once at first save.

pub mod document;
