//! Library domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the library store.
//!
//! # Invariants
//! - Every book is identified by a stable `BookId`.
//! - Removal is a hard delete; ids of removed books are never issued again.

pub mod book;
