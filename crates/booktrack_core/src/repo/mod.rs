//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the library service.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`)
//!   instead of silently ignoring bad ids.

pub mod book_repo;
