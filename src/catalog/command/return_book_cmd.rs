use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub book_id: i64,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id)
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_return_book() {
        let mut svc = CatalogServiceImpl::new(&Configuration::default(), Box::new(MemoryBookRepository::new()));
        let book = svc.add_book("Hyperion", "Simmons", 1989).expect("should add book");

        let err = ReturnBookCommand::new(&mut svc)
            .execute(ReturnBookCommandRequest::new(book.id)).expect_err("not borrowed yet");
        assert!(matches!(err, CommandError::InvalidState { .. }));

        let _ = BorrowBookCommand::new(&mut svc)
            .execute(BorrowBookCommandRequest::new(book.id)).expect("should borrow book");
        let res = ReturnBookCommand::new(&mut svc)
            .execute(ReturnBookCommandRequest::new(book.id)).expect("should return book");
        assert!(res.book.is_available());
        assert!(svc.find_book_by_id(book.id).expect("should find").is_available());
    }
}
