use std::io::{BufRead, Write};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub const EXIT_OK: i32 = 0;

const RULE: &str = "----------------------------------------";

/// Numbered text menu over a catalog. Reads one answer per line from `input` and writes
/// prompts and results to `output`.
///
/// The loop ends on choice 0 or when `input` is exhausted, and returns the process exit code.
pub struct ConsoleController<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    pub fn run(&mut self, catalog_service: &mut dyn CatalogService) -> LibraryResult<i32> {
        loop {
            self.display_menu()?;
            let choice = match self.read_line()? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    return Ok(EXIT_OK);
                }
            };
            debug!(choice = choice.as_str(), "menu choice");
            match choice.trim().parse::<u32>() {
                Ok(1) => self.add_book(catalog_service)?,
                Ok(2) => self.search_books(catalog_service)?,
                Ok(3) => self.borrow_book(catalog_service)?,
                Ok(4) => self.return_book(catalog_service)?,
                Ok(5) => self.list_books(catalog_service)?,
                Ok(6) => self.remove_book(catalog_service)?,
                Ok(0) => {
                    writeln!(self.output, "Exiting. Goodbye!")?;
                    return Ok(EXIT_OK);
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn display_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Library Management System")?;
        writeln!(self.output, "-------------------------")?;
        writeln!(self.output, "1. Add a new book")?;
        writeln!(self.output, "2. Search for a book")?;
        writeln!(self.output, "3. Borrow a book")?;
        writeln!(self.output, "4. Return a book")?;
        writeln!(self.output, "5. Display all books")?;
        writeln!(self.output, "6. Remove a book")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> LibraryResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", "-".repeat(title.len()))?;
        Ok(())
    }

    // None once input is exhausted.
    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn prompt(&mut self, label: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_book_id(&mut self) -> LibraryResult<Option<i64>> {
        let Some(answer) = self.prompt("Enter book ID: ")? else {
            return Ok(None);
        };
        match answer.trim().parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid book ID.")?;
                Ok(None)
            }
        }
    }

    fn add_book(&mut self, catalog_service: &mut dyn CatalogService) -> LibraryResult<()> {
        self.heading("Add a new book")?;
        let Some(title) = self.prompt("Enter title: ")? else { return Ok(()) };
        let Some(author) = self.prompt("Enter author: ")? else { return Ok(()) };
        let Some(year) = self.prompt("Enter publication year: ")? else { return Ok(()) };

        let res = AddBookCommandRequest::from_input(title.as_str(), author.as_str(), year.as_str())
            .and_then(|req| AddBookCommand::new(catalog_service).execute(req));
        match res {
            Ok(res) => writeln!(self.output, "Book added successfully with ID {}.", res.book.id())?,
            Err(err) => writeln!(self.output, "Failed to add book: {}.", err.message())?,
        }
        Ok(())
    }

    fn search_books(&mut self, catalog_service: &dyn CatalogService) -> LibraryResult<()> {
        self.heading("Search for a book")?;
        writeln!(self.output, "1. Search by ID")?;
        writeln!(self.output, "2. Search by title")?;
        writeln!(self.output, "3. Search by author")?;
        let Some(choice) = self.prompt("Enter your choice: ")? else { return Ok(()) };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                let Some(id) = self.prompt_book_id()? else { return Ok(()) };
                match GetBookCommand::new(catalog_service).execute(GetBookCommandRequest::new(id)) {
                    Ok(res) => {
                        writeln!(self.output)?;
                        writeln!(self.output, "Book found:")?;
                        writeln!(self.output, "{}", res.book)?;
                    }
                    Err(_) => writeln!(self.output, "Book not found.")?,
                }
            }
            Ok(2) => {
                let Some(title) = self.prompt("Enter book title: ")? else { return Ok(()) };
                let res = SearchBooksCommand::new(catalog_service)
                    .execute(SearchBooksCommandRequest::by_title(title.as_str()));
                self.write_matches(res.map(|r| r.books), "No books found with that title.")?;
            }
            Ok(3) => {
                let Some(author) = self.prompt("Enter author name: ")? else { return Ok(()) };
                let res = SearchBooksCommand::new(catalog_service)
                    .execute(SearchBooksCommandRequest::by_author(author.as_str()));
                self.write_matches(res.map(|r| r.books), "No books found by that author.")?;
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(())
    }

    fn write_matches(&mut self, books: Result<Vec<BookDto>, CommandError>, none_found: &str) -> LibraryResult<()> {
        let books = books.unwrap_or_default();
        if books.is_empty() {
            writeln!(self.output, "{}", none_found)?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "Books found:")?;
        for book in books {
            writeln!(self.output, "{}", book)?;
            writeln!(self.output, "--------------------")?;
        }
        Ok(())
    }

    fn borrow_book(&mut self, catalog_service: &mut dyn CatalogService) -> LibraryResult<()> {
        self.heading("Borrow a book")?;
        let Some(id) = self.prompt_book_id()? else { return Ok(()) };
        match BorrowBookCommand::new(catalog_service).execute(BorrowBookCommandRequest::new(id)) {
            Ok(_) => writeln!(self.output, "Book borrowed successfully.")?,
            Err(CommandError::NotFound { .. }) => {
                writeln!(self.output, "Failed to borrow book. No book with ID {} exists.", id)?
            }
            Err(CommandError::InvalidState { .. }) => {
                writeln!(self.output, "Failed to borrow book. It is already borrowed.")?
            }
            Err(err) => writeln!(self.output, "Failed to borrow book: {}.", err.message())?,
        }
        Ok(())
    }

    fn return_book(&mut self, catalog_service: &mut dyn CatalogService) -> LibraryResult<()> {
        self.heading("Return a book")?;
        let Some(id) = self.prompt_book_id()? else { return Ok(()) };
        match ReturnBookCommand::new(catalog_service).execute(ReturnBookCommandRequest::new(id)) {
            Ok(_) => writeln!(self.output, "Book returned successfully.")?,
            Err(CommandError::NotFound { .. }) => {
                writeln!(self.output, "Failed to return book. No book with ID {} exists.", id)?
            }
            Err(CommandError::InvalidState { .. }) => {
                writeln!(self.output, "Failed to return book. It is already available.")?
            }
            Err(err) => writeln!(self.output, "Failed to return book: {}.", err.message())?,
        }
        Ok(())
    }

    fn remove_book(&mut self, catalog_service: &mut dyn CatalogService) -> LibraryResult<()> {
        self.heading("Remove a book")?;
        let Some(id) = self.prompt_book_id()? else { return Ok(()) };
        match RemoveBookCommand::new(catalog_service).execute(RemoveBookCommandRequest::new(id)) {
            Ok(_) => writeln!(self.output, "Book removed successfully.")?,
            Err(CommandError::NotFound { .. }) => {
                writeln!(self.output, "Failed to remove book. No book with ID {} exists.", id)?
            }
            Err(err) => writeln!(self.output, "Failed to remove book: {}.", err.message())?,
        }
        Ok(())
    }

    fn list_books(&mut self, catalog_service: &dyn CatalogService) -> LibraryResult<()> {
        let books = ListBooksCommand::new(catalog_service)
            .execute(ListBooksCommandRequest::default())
            .map(|res| res.books)
            .unwrap_or_default();
        if books.is_empty() {
            writeln!(self.output, "No books in the library.")?;
            return Ok(());
        }
        writeln!(self.output, "Library Books:")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "ID | Title | Author | Year | Available")?;
        writeln!(self.output, "{}", RULE)?;
        for book in books {
            writeln!(self.output, "{} | {} | {} | {} | {}", book.id, book.title, book.author, book.year,
                     if book.is_available() { "Yes" } else { "No" })?;
        }
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }
}
