use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the stored collection in process memory. Clones share the same
// storage, so a test can hand one clone to the catalog and keep another to inspect what was
// persisted or to make writes fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookRepository {
    books: Rc<RefCell<Vec<BookEntity>>>,
    writes: Rc<Cell<usize>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_books(books: Vec<BookEntity>) -> Self {
        let repo = Self::default();
        repo.books.replace(books);
        repo
    }

    #[cfg(test)]
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    // number of successful store_all calls so far
    #[cfg(test)]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    #[cfg(test)]
    pub fn stored(&self) -> Vec<BookEntity> {
        self.books.borrow().clone()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.borrow().clone())
    }

    fn store_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        if self.read_only.get() {
            return Err(LibraryError::storage("memory store is read-only", Some(self.location())));
        }
        self.books.replace(entities.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

impl BookRepository for MemoryBookRepository {}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    #[test]
    fn test_should_share_storage_between_clones() {
        let repo = MemoryBookRepository::new();
        let handle = repo.clone();
        repo.store_all(&[BookEntity::new(1, "Dune", "Herbert", 1965)]).expect("should store");
        assert_eq!(1, handle.stored().len());
        assert_eq!(1, handle.writes());
    }

    #[test]
    fn test_should_reject_writes_when_read_only() {
        let repo = MemoryBookRepository::with_books(vec![BookEntity::new(1, "Dune", "Herbert", 1965)]);
        repo.set_read_only(true);
        assert!(repo.store_all(&[]).is_err());
        assert_eq!(1, repo.load_all().expect("should load").len());
        assert_eq!(0, repo.writes());
    }
}
