//! Library store use-case service.
//!
//! # Responsibility
//! - Provide the add/remove/toggle-read/list entry points for adapters.
//! - Coerce raw adapter input before it reaches the repository.
//!
//! # Invariants
//! - `add` never fails on input; malformed page input degrades to
//!   `PageCount::Unknown`. Id collisions are retried a bounded number of times.
//! - Lookup misses on `remove`/`toggle_read` are reported as
//!   `RepoError::NotFound` and leave the store unchanged.

use crate::model::book::{Book, BookId, NewBook};
use crate::repo::book_repo::{BookRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Upper bound on inserts tried by one `add` call.
pub const MAX_ID_ATTEMPTS: u32 = 4;

/// Library store facade over a repository implementation.
pub struct LibraryService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> LibraryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one book from raw adapter values and returns its id.
    ///
    /// # Contract
    /// - `pages` goes through `PageCount::parse`; malformed input is stored
    ///   as `PageCount::Unknown`, never rejected.
    /// - `is_read` is `true` only for the exact string `"true"`.
    /// - The book is appended after every existing entry.
    /// - Errors come only from the repository (see `add_book`).
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        pages: &str,
        is_read: &str,
    ) -> RepoResult<BookId> {
        self.add_book(NewBook::from_raw(title, author, genre, pages, is_read))
    }

    /// Adds one book from already typed values and returns its id.
    ///
    /// # Contract
    /// - `RepoError::DuplicateId` is retried with a fresh id, at most
    ///   `MAX_ID_ATTEMPTS` inserts in total; after that the last
    ///   `DuplicateId` is returned and the store is unchanged.
    /// - Any other repository error is returned on the first attempt.
    /// - `InMemoryBookRepository` only rejects ids it already issued, which a
    ///   fresh v4 id does not hit in practice.
    pub fn add_book(&mut self, input: NewBook) -> RepoResult<BookId> {
        let pages_known = input.pages.is_known();
        let mut attempt = 1;
        loop {
            match self.repo.insert_book(Book::new(input.clone())) {
                Ok(id) => {
                    info!(
                        "event=book_added module=library status=ok book_id={} pages_known={} size={}",
                        id,
                        pages_known,
                        self.repo.list_books().len()
                    );
                    return Ok(id);
                }
                Err(RepoError::DuplicateId(id)) if attempt < MAX_ID_ATTEMPTS => {
                    warn!(
                        "event=book_added module=library status=retry attempt={attempt} book_id={id}"
                    );
                    attempt += 1;
                }
                Err(err) => {
                    warn!(
                        "event=book_added module=library status=error attempt={attempt} error={err}"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Removes one book by id and returns the removed record.
    pub fn remove(&mut self, id: BookId) -> RepoResult<Book> {
        match self.repo.remove_book(id) {
            Ok(book) => {
                info!(
                    "event=book_removed module=library status=ok book_id={} size={}",
                    id,
                    self.repo.list_books().len()
                );
                Ok(book)
            }
            Err(err) => {
                warn!("event=book_removed module=library status=error book_id={id} error={err}");
                Err(err)
            }
        }
    }

    /// Flips the read flag of one book and returns the new value.
    pub fn toggle_read(&mut self, id: BookId) -> RepoResult<bool> {
        match self.repo.toggle_read(id) {
            Ok(is_read) => {
                debug!(
                    "event=book_read_toggled module=library status=ok book_id={id} is_read={is_read}"
                );
                Ok(is_read)
            }
            Err(err) => {
                warn!(
                    "event=book_read_toggled module=library status=error book_id={id} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Returns every book in insertion order.
    pub fn list(&self) -> &[Book] {
        self.repo.list_books()
    }

    /// Gets one book by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.repo.get_book(id)
    }

    pub fn len(&self) -> usize {
        self.repo.list_books().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list_books().is_empty()
    }
}
