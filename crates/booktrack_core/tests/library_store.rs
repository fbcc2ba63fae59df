use booktrack_core::{
    Book, BookId, BookRepository, InMemoryBookRepository, LibraryService, NewBook, PageCount,
    RepoError, RepoResult, MAX_ID_ATTEMPTS,
};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn new_store() -> LibraryService<InMemoryBookRepository> {
    LibraryService::new(InMemoryBookRepository::new())
}

fn ids_of(store: &LibraryService<InMemoryBookRepository>) -> Vec<BookId> {
    store.list().iter().map(|book| book.id()).collect()
}

#[test]
fn add_coerces_raw_input() {
    let mut store = new_store();

    let dune = store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();
    let second = store.add("X", "Y", "Z", "", "false").unwrap();

    assert_eq!(store.len(), 2);
    let books = store.list();
    assert_eq!(books[0].id(), dune);
    assert_eq!(books[0].title(), "Dune");
    assert_eq!(books[0].author(), "Herbert");
    assert_eq!(books[0].genre(), "SciFi");
    assert_eq!(books[0].pages(), PageCount::Known(412));
    assert!(books[0].is_read());

    assert_eq!(books[1].id(), second);
    assert_eq!(books[1].pages(), PageCount::Unknown);
    assert!(!books[1].is_read());
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = new_store();
    let added: Vec<BookId> = (0..10)
        .map(|index| {
            store
                .add(format!("title {index}"), "author", "genre", "10", "false")
                .unwrap()
        })
        .collect();

    assert_eq!(store.len(), 10);
    assert_eq!(ids_of(&store), added);
}

#[test]
fn add_book_accepts_typed_input() {
    let mut store = new_store();
    let id = store.add_book(NewBook {
        title: "Emma".to_string(),
        author: "Austen".to_string(),
        genre: "Classic".to_string(),
        pages: PageCount::Known(0),
        is_read: true,
    })
    .unwrap();

    let book = store.get(id).unwrap();
    assert_eq!(book.pages(), PageCount::Known(0));
    assert!(book.is_read());
}

#[test]
fn ids_are_unique_across_removals() {
    let mut store = new_store();
    let mut seen = HashSet::new();

    for round in 0..50 {
        let id = store.add(format!("book {round}"), "a", "g", "1", "false").unwrap();
        assert!(seen.insert(id), "id {id} was issued twice");
        if round % 2 == 0 {
            store.remove(id).unwrap();
        }
    }

    assert_eq!(store.len(), 25);
}

#[test]
fn remove_deletes_only_the_target() {
    let mut store = new_store();
    let dune = store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();
    let second = store.add("X", "Y", "Z", "", "false").unwrap();

    let removed = store.remove(dune).unwrap();
    assert_eq!(removed.title(), "Dune");
    assert_eq!(store.len(), 1);
    assert_eq!(ids_of(&store), vec![second]);
    assert!(store.get(dune).is_none());
}

#[test]
fn toggle_read_twice_restores_flag() {
    let mut store = new_store();
    store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();
    let second = store.add("X", "Y", "Z", "", "false").unwrap();

    assert!(store.toggle_read(second).unwrap());
    assert!(store.get(second).unwrap().is_read());
    assert!(!store.toggle_read(second).unwrap());
    assert!(!store.get(second).unwrap().is_read());
}

#[test]
fn toggle_read_leaves_other_fields_untouched() {
    let mut store = new_store();
    let id = store.add("Dune", "Herbert", "SciFi", "412", "false").unwrap();
    let before = store.get(id).unwrap().clone();

    store.toggle_read(id).unwrap();
    let after = store.get(id).unwrap();
    assert_eq!(after.id(), before.id());
    assert_eq!(after.title(), before.title());
    assert_eq!(after.author(), before.author());
    assert_eq!(after.genre(), before.genre());
    assert_eq!(after.pages(), before.pages());
    assert_ne!(after.is_read(), before.is_read());
}

#[test]
fn misses_report_not_found_and_keep_store_unchanged() {
    let mut store = new_store();
    let kept = store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();
    let missing = Uuid::new_v4();

    assert_eq!(store.remove(missing).unwrap_err(), RepoError::NotFound(missing));
    assert_eq!(
        store.toggle_read(missing).unwrap_err(),
        RepoError::NotFound(missing)
    );
    assert_eq!(ids_of(&store), vec![kept]);
    assert!(store.get(kept).unwrap().is_read());
}

#[test]
fn removing_twice_reports_not_found() {
    let mut store = new_store();
    let id = store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();

    store.remove(id).unwrap();
    let err = store.remove(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
    assert!(store.is_empty());
}

#[test]
fn repository_can_be_used_directly() {
    let mut repo = InMemoryBookRepository::new();
    let book = Book::new(NewBook::from_raw("Dune", "Herbert", "SciFi", "412", "true"));
    let id = repo.insert_book(book.clone()).unwrap();

    assert_eq!(repo.get_book(id), Some(&book));
    assert_eq!(
        repo.insert_book(book).unwrap_err(),
        RepoError::DuplicateId(id)
    );
    assert_eq!(repo.list_books().len(), 1);
}

/// Repository that rejects its first `duplicate_rejections` inserts as
/// duplicates, or every insert with `NotFound` when `always_fail` is set.
struct FlakyRepo {
    inner: InMemoryBookRepository,
    duplicate_rejections: u32,
    always_fail: bool,
    insert_calls: Rc<Cell<u32>>,
}

impl FlakyRepo {
    fn rejecting_duplicates(count: u32) -> Self {
        Self {
            inner: InMemoryBookRepository::new(),
            duplicate_rejections: count,
            always_fail: false,
            insert_calls: Rc::new(Cell::new(0)),
        }
    }

    fn always_failing() -> Self {
        Self {
            always_fail: true,
            ..Self::rejecting_duplicates(0)
        }
    }
}

impl BookRepository for FlakyRepo {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        if self.always_fail {
            return Err(RepoError::NotFound(book.id()));
        }
        if self.duplicate_rejections > 0 {
            self.duplicate_rejections -= 1;
            return Err(RepoError::DuplicateId(book.id()));
        }
        self.inner.insert_book(book)
    }

    fn remove_book(&mut self, id: BookId) -> RepoResult<Book> {
        self.inner.remove_book(id)
    }

    fn toggle_read(&mut self, id: BookId) -> RepoResult<bool> {
        self.inner.toggle_read(id)
    }

    fn get_book(&self, id: BookId) -> Option<&Book> {
        self.inner.get_book(id)
    }

    fn list_books(&self) -> &[Book] {
        self.inner.list_books()
    }
}

#[test]
fn add_retries_duplicate_ids_with_fresh_ids() {
    let repo = FlakyRepo::rejecting_duplicates(MAX_ID_ATTEMPTS - 1);
    let calls = Rc::clone(&repo.insert_calls);
    let mut store = LibraryService::new(repo);

    let id = store.add("Dune", "Herbert", "SciFi", "412", "true").unwrap();

    assert_eq!(calls.get(), MAX_ID_ATTEMPTS);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].id(), id);
    assert_eq!(store.get(id).unwrap().title(), "Dune");
}

#[test]
fn add_stops_retrying_at_attempt_bound() {
    let repo = FlakyRepo::rejecting_duplicates(u32::MAX);
    let calls = Rc::clone(&repo.insert_calls);
    let mut store = LibraryService::new(repo);

    let err = store
        .add("Dune", "Herbert", "SciFi", "412", "true")
        .unwrap_err();

    assert!(matches!(err, RepoError::DuplicateId(_)));
    assert_eq!(calls.get(), MAX_ID_ATTEMPTS);
    assert!(store.is_empty());
}

#[test]
fn add_returns_other_repository_errors_without_retrying() {
    let repo = FlakyRepo::always_failing();
    let calls = Rc::clone(&repo.insert_calls);
    let mut store = LibraryService::new(repo);

    let err = store
        .add("Dune", "Herbert", "SciFi", "412", "true")
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(_)));
    assert_eq!(calls.get(), 1);
    assert!(store.is_empty());
}
