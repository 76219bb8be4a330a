//! Search entry points.
//!
//! # Responsibility
//! - Expose the conjunctive filter API over the document repository.
//! - Keep result shaping (ordering, error taxonomy) inside core.

pub mod filter;
