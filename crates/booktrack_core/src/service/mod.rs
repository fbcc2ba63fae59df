//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the library store operations.
//! - Keep presentation adapters decoupled from storage details.

pub mod library_service;
