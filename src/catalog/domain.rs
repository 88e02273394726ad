pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService owns the catalog's records. Every mutating call writes the whole collection
// to the repository before returning; on `Ok` memory and storage agree, and on `Err` nothing
// changed in either.
pub trait CatalogService {
    // Assigns the next id; the new book starts available.
    fn add_book(&mut self, title: &str, author: &str, year: i32) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, id: i64) -> LibraryResult<()>;
    // Returns a snapshot, not a live view of the record.
    fn find_book_by_id(&self, id: i64) -> Option<BookDto>;
    // Case-sensitive substring match; an empty needle matches every book.
    fn find_books_by_title(&self, title: &str) -> Vec<BookDto>;
    fn find_books_by_author(&self, author: &str) -> Vec<BookDto>;
    fn borrow_book(&mut self, id: i64) -> LibraryResult<BookDto>;
    fn return_book(&mut self, id: i64) -> LibraryResult<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
    // The id the next added book will receive.
    fn next_id(&self) -> i64;
    fn location(&self) -> String;
}
