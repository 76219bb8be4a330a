//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and search calls into use-case level APIs.
//! - Keep external callers decoupled from storage details.

pub mod document_service;
