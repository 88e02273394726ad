use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity is the stored form of a catalog record. The serialized shape is exactly the five
// fields below, so the struct doubles as the on-disk record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub available: bool,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str, year: i32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            available: true,
        }
    }

    // Available -> Borrowed
    pub fn borrow(&mut self) -> LibraryResult<()> {
        match self.status() {
            BookStatus::Available => {
                self.available = false;
                Ok(())
            }
            BookStatus::Borrowed => Err(LibraryError::invalid_state(
                format!("book {} is already borrowed", self.id).as_str(), Some(BookStatus::Borrowed.to_string()))),
        }
    }

    // Borrowed -> Available
    pub fn return_book(&mut self) -> LibraryResult<()> {
        match self.status() {
            BookStatus::Borrowed => {
                self.available = true;
                Ok(())
            }
            BookStatus::Available => Err(LibraryError::invalid_state(
                format!("book {} is already available", self.id).as_str(), Some(BookStatus::Available.to_string()))),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_available(self.available)
    }
}
