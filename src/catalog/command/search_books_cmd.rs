use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    Author,
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub field: SearchField,
    pub text: String,
}

impl SearchBooksCommandRequest {
    pub fn by_title(text: &str) -> Self {
        Self {
            field: SearchField::Title,
            text: text.to_string(),
        }
    }

    pub fn by_author(text: &str) -> Self {
        Self {
            field: SearchField::Author,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match req.field {
            SearchField::Title => self.catalog_service.find_books_by_title(req.text.as_str()),
            SearchField::Author => self.catalog_service.find_books_by_author(req.text.as_str()),
        };
        Ok(SearchBooksCommandResponse { books })
    }
}
