use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub book_id: i64,
}

impl BorrowBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'a> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.catalog_service.borrow_book(req.book_id)
            .map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
