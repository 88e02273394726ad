use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    // Builds a request from raw console input; the year must be an integer. Title and author
    // are kept exactly as typed.
    pub fn from_input(title: &str, author: &str, year: &str) -> Result<Self, CommandError> {
        let year = year.trim().parse::<i32>().map_err(|_| LibraryError::validation(
            format!("publication year must be a whole number, got {:?}", year.trim()).as_str(),
            Some("year".to_string())))?;
        Ok(Self::new(title, author, year))
    }

    fn validate(&self) -> LibraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("title must not be empty", Some("title".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("author".to_string())));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.year)
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    fn catalog() -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::default(), Box::new(MemoryBookRepository::new()))
    }

    #[test]
    fn test_should_run_add_book() {
        let mut svc = catalog();
        let res = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new("Dune", "Herbert", 1965))
            .expect("should add book");
        assert_eq!(1, res.book.id);
        assert_eq!(1, svc.list_books().len());
    }

    #[test]
    fn test_should_reject_blank_title_or_author() {
        let mut svc = catalog();
        let err = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new("   ", "Herbert", 1965)).expect_err("blank title");
        assert!(matches!(err, CommandError::Validation { .. }));
        let err = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new("Dune", "", 1965)).expect_err("blank author");
        assert!(matches!(err, CommandError::Validation { .. }));
        assert!(svc.list_books().is_empty());
        assert_eq!(1, svc.next_id());
    }

    #[test]
    fn test_should_parse_console_input() {
        let req = AddBookCommandRequest::from_input("Dune", "Herbert", " 1965 ").expect("should parse");
        assert_eq!("Dune", req.title.as_str());
        assert_eq!(1965, req.year);
        let err = AddBookCommandRequest::from_input("Dune", "Herbert", "nineteen").expect_err("bad year");
        assert!(matches!(err, CommandError::Validation { reason_code: Some(ref field), .. } if field == "year"));
    }

    #[test]
    fn test_should_keep_title_and_author_as_typed() {
        let mut svc = catalog();
        let req = AddBookCommandRequest::from_input(" Dune ", "Frank Herbert  ", "1965").expect("should parse");
        assert_eq!(" Dune ", req.title.as_str());
        let res = AddBookCommand::new(&mut svc).execute(req).expect("should add book");
        assert_eq!(" Dune ", res.book.title.as_str());
        assert_eq!("Frank Herbert  ", res.book.author.as_str());
    }

    #[test]
    fn test_should_report_blank_field_as_validation() {
        let req = AddBookCommandRequest::new("Dune", "  ", 1965);
        let err = req.validate().expect_err("blank author");
        assert!(matches!(err, LibraryError::Validation { reason_code: Some(ref field), .. } if field == "author"));
        assert!(matches!(CommandError::from(err), CommandError::Validation { .. }));
    }
}
