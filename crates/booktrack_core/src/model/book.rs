//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical library record and its page-count projection.
//! - Coerce raw adapter input (form strings) into typed field values.
//!
//! # Invariants
//! - `id` is generated once and never changes.
//! - `title`, `author`, `genre` and `pages` are fixed at construction.
//! - `is_read` is the only mutable field and flips only through the store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one library entry.
pub type BookId = Uuid;

/// Page count of a book.
///
/// `Unknown` is kept apart from `Known(0)` so an empty form field never reads
/// as a zero-page book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum PageCount {
    Known(u32),
    #[default]
    Unknown,
}

impl PageCount {
    /// Coerces raw page input into a page count.
    ///
    /// Accepts a trimmed base-10 integer in `u32` range (leading `+` allowed).
    /// Empty, non-numeric, negative, fractional or overflowing input yields
    /// `Unknown` instead of an error.
    ///
    /// This is stricter than JavaScript numeric coercion (`+value || ""`) on
    /// purpose: `"0"` stays `Known(0)` rather than becoming unknown, and
    /// exponent or hex forms such as `"1e3"` and `"0x10"` are `Unknown`.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(value) => Self::Known(value),
            Err(_) => Self::Unknown,
        }
    }

    /// Returns the count when known.
    pub fn get(self) -> Option<u32> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Option<u32>> for PageCount {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<PageCount> for Option<u32> {
    fn from(value: PageCount) -> Self {
        value.get()
    }
}

impl Display for PageCount {
    /// Unknown renders as the empty string, matching an empty table cell.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::Unknown => Ok(()),
        }
    }
}

/// Coerces the adapter's read flag into a boolean.
///
/// Only the exact string `"true"` is read; everything else is unread.
pub fn parse_read_flag(input: &str) -> bool {
    input == "true"
}

/// Display columns of a book, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookField {
    Title,
    Author,
    Genre,
    Pages,
    IsRead,
}

impl BookField {
    /// All columns in the order a table shows them.
    pub const ALL: [BookField; 5] = [
        Self::Title,
        Self::Author,
        Self::Genre,
        Self::Pages,
        Self::IsRead,
    ];

    /// Stable field key, identical to the serialized field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::Pages => "pages",
            Self::IsRead => "is_read",
        }
    }

    /// Column id used by table renderers to style one column.
    pub fn column_id(self) -> &'static str {
        match self {
            Self::Title => "col-title",
            Self::Author => "col-author",
            Self::Genre => "col-genre",
            Self::Pages => "col-pages",
            Self::IsRead => "col-read",
        }
    }
}

/// Typed input for creating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: PageCount,
    pub is_read: bool,
}

impl NewBook {
    /// Builds typed input from raw adapter strings.
    pub fn from_raw(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        pages: &str,
        is_read: &str,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            pages: PageCount::parse(pages),
            is_read: parse_read_flag(is_read),
        }
    }
}

/// One library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    genre: String,
    pages: PageCount,
    is_read: bool,
}

impl Book {
    /// Creates a book with a freshly generated id.
    pub fn new(input: NewBook) -> Self {
        Self::with_id(Uuid::new_v4(), input)
    }

    /// Creates a book with a caller-provided id.
    ///
    /// Uniqueness is enforced by the repository on insert, not here.
    pub fn with_id(id: BookId, input: NewBook) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            genre: input.genre,
            pages: input.pages,
            is_read: input.is_read,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn pages(&self) -> PageCount {
        self.pages
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    /// Flips the read flag and returns the new value.
    pub(crate) fn toggle_read(&mut self) -> bool {
        self.is_read = !self.is_read;
        self.is_read
    }

    /// Returns display values in [`BookField::ALL`] order.
    pub fn display_fields(&self) -> Vec<(BookField, String)> {
        BookField::ALL
            .iter()
            .map(|field| (*field, self.display_value(*field)))
            .collect()
    }

    /// Returns the display value for one column.
    pub fn display_value(&self, field: BookField) -> String {
        match field {
            BookField::Title => self.title.clone(),
            BookField::Author => self.author.clone(),
            BookField::Genre => self.genre.clone(),
            BookField::Pages => self.pages.to_string(),
            BookField::IsRead => self.is_read.to_string(),
        }
    }
}
