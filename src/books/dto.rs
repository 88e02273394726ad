use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for Catalog service. It is an owned snapshot of a record
// taken when the query ran; later borrow/return/remove calls do not show up in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str, year: i32, status: BookStatus) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            book_status: status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.book_status.is_available()
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
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
        self.book_status
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            book_status: other.status(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            available: other.is_available(),
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Year: {}", self.year)?;
        write!(f, "Available: {}", if self.is_available() { "Yes" } else { "No" })
    }
}
