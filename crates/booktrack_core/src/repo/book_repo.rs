//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered book collection behind a narrow mutation API.
//! - Report lookup misses and id reuse as semantic errors.
//!
//! # Invariants
//! - Iteration order equals insertion order.
//! - An id accepted once is never accepted again, even after removal.

use crate::model::book::{Book, BookId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(BookId),
    DuplicateId(BookId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::DuplicateId(id) => write!(f, "book id already issued: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for library book storage.
pub trait BookRepository {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId>;
    fn remove_book(&mut self, id: BookId) -> RepoResult<Book>;
    fn toggle_read(&mut self, id: BookId) -> RepoResult<bool>;
    fn get_book(&self, id: BookId) -> Option<&Book>;
    fn list_books(&self) -> &[Book];
}

/// Process-local book storage.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
    issued_ids: HashSet<BookId>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: BookId) -> RepoResult<usize> {
        self.books
            .iter()
            .position(|book| book.id() == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl BookRepository for InMemoryBookRepository {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId> {
        let id = book.id();
        if !self.issued_ids.insert(id) {
            return Err(RepoError::DuplicateId(id));
        }

        self.books.push(book);
        Ok(id)
    }

    fn remove_book(&mut self, id: BookId) -> RepoResult<Book> {
        let index = self.position(id)?;
        // `remove` keeps the remaining order intact.
        Ok(self.books.remove(index))
    }

    fn toggle_read(&mut self, id: BookId) -> RepoResult<bool> {
        let index = self.position(id)?;
        Ok(self.books[index].toggle_read())
    }

    fn get_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    fn list_books(&self) -> &[Book] {
        &self.books
    }
}
