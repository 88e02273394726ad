use std::collections::HashSet;
use tracing::{debug, error, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::json::encode_book;

pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    next_id: i64,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    // Loads whatever the repository holds. A repository that cannot be read leaves the
    // catalog empty rather than failing construction.
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        let books = match book_repository.load_all() {
            Ok(books) => unique_by_id(books),
            Err(err) => {
                warn!(location = %book_repository.location(), error = %err,
                    "could not load catalog, starting empty");
                vec![]
            }
        };
        let next_id = books.iter().map(|b| b.id()).max().map_or(1, |max| max.saturating_add(1));
        info!(store = %config.store, location = %book_repository.location(), books = books.len(), next_id,
            "catalog loaded");
        Self {
            books,
            next_id,
            book_repository,
        }
    }

    fn position(&self, id: i64) -> LibraryResult<usize> {
        self.books.iter().position(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    fn persist(&self) -> LibraryResult<()> {
        self.book_repository.store_all(&self.books).map_err(|err| {
            error!(location = %self.book_repository.location(), error = %err, "failed to persist catalog");
            err
        })
    }

    // Applies a borrow/return transition to one book and persists it, undoing the transition
    // if the write fails.
    fn transition(&mut self, id: i64, action: &str,
                  apply: fn(&mut BookEntity) -> LibraryResult<()>) -> LibraryResult<BookDto> {
        let ndx = self.position(id).map_err(|err| {
            warn!(id, action, "book not found");
            err
        })?;
        let before = self.books[ndx].available;
        apply(&mut self.books[ndx]).map_err(|err| {
            warn!(id, action, status = %self.books[ndx].status(), "book is not in the right state");
            err
        })?;
        if let Err(err) = self.persist() {
            self.books[ndx].available = before;
            return Err(err);
        }
        info!(id, action, "book updated");
        Ok(BookDto::from(&self.books[ndx]))
    }

    fn filter_books(&self, matches: impl Fn(&BookEntity) -> bool) -> Vec<BookDto> {
        self.books.iter().filter(|b| matches(b)).map(BookDto::from).collect()
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookDto> {
        let id = self.next_id;
        if self.books.iter().any(|b| b.id() == id) {
            return Err(LibraryError::runtime(
                format!("book id {} is already taken, id space exhausted", id).as_str(), None));
        }
        let book = BookEntity::new(id, title, author, year);
        self.books.push(book);
        self.next_id = id.saturating_add(1);
        if let Err(err) = self.persist() {
            self.books.pop();
            self.next_id = id;
            return Err(err);
        }
        let added = &self.books[self.books.len() - 1];
        info!(id, record = %encode_book(added).unwrap_or_default(), "book added");
        Ok(BookDto::from(added))
    }

    fn remove_book(&mut self, id: i64) -> LibraryResult<()> {
        let ndx = self.position(id).map_err(|err| {
            warn!(id, "cannot remove missing book");
            err
        })?;
        let removed = self.books.remove(ndx);
        if let Err(err) = self.persist() {
            self.books.insert(ndx, removed);
            return Err(err);
        }
        info!(id, title = %removed.title, "book removed");
        Ok(())
    }

    fn find_book_by_id(&self, id: i64) -> Option<BookDto> {
        debug!(id, "find book by id");
        self.books.iter().find(|b| b.id() == id).map(BookDto::from)
    }

    fn find_books_by_title(&self, title: &str) -> Vec<BookDto> {
        debug!(title, "find books by title");
        self.filter_books(|b| b.title().contains(title))
    }

    fn find_books_by_author(&self, author: &str) -> Vec<BookDto> {
        debug!(author, "find books by author");
        self.filter_books(|b| b.author().contains(author))
    }

    fn borrow_book(&mut self, id: i64) -> LibraryResult<BookDto> {
        self.transition(id, "borrow", BookEntity::borrow)
    }

    fn return_book(&mut self, id: i64) -> LibraryResult<BookDto> {
        self.transition(id, "return", BookEntity::return_book)
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }

    fn next_id(&self) -> i64 {
        self.next_id
    }

    fn location(&self) -> String {
        self.book_repository.location()
    }
}

// Keeps the first record for each id; later duplicates are dropped.
fn unique_by_id(books: Vec<BookEntity>) -> Vec<BookEntity> {
    let mut seen = HashSet::with_capacity(books.len());
    books.into_iter().filter(|b| {
        let first = seen.insert(b.id());
        if !first {
            warn!(id = b.id(), title = b.title(), "dropping book with duplicate id");
        }
        first
    }).collect()
}
