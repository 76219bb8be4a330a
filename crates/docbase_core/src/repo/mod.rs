//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate collection bookkeeping (upsert ordering, id stamping) from
//!   service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`BlankId`) instead of panicking
//!   on contract violations.
//! - Absence of a document is `Ok(None)`, never an error.

pub mod document_repo;
