use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::{file, json};

const EMPTY_CATALOG: &str = "[]";

// JsonBookRepository keeps the catalog as one JSON array in a single file.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for JsonBookRepository {
    // An absent file is seeded with an empty array. Unparseable content is not fatal: whatever
    // decoded cleanly is returned and the problem is logged.
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        if !file::exists(&self.path) {
            info!(path = %self.path.display(), "catalog file not found, creating an empty one");
            file::write_all(&self.path, EMPTY_CATALOG)?;
            return Ok(vec![]);
        }

        let content = file::read_all(&self.path)?;
        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "catalog file is empty");
            return Ok(vec![]);
        }

        let decoded = json::decode_all(content.as_str());
        if let Some(err) = decoded.error {
            warn!(path = %self.path.display(), loaded = decoded.books.len(), error = %err,
                "catalog file could not be fully parsed");
        }
        Ok(decoded.books)
    }

    fn store_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        let content = json::encode_all(entities)?;
        file::write_all(&self.path, content.as_str())?;
        debug!(path = %self.path.display(), books = entities.len(), "catalog saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl BookRepository for JsonBookRepository {}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[test]
    fn test_should_create_empty_file_when_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("books.json");
        let repo = JsonBookRepository::new(&path);
        let books = repo.load_all().expect("should load");
        assert!(books.is_empty());
        assert_eq!("[]", fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn test_should_treat_empty_file_as_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        fs::write(&path, "").unwrap();
        let books = JsonBookRepository::new(&path).load_all().expect("should load");
        assert!(books.is_empty());
        assert_eq!("", fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn test_should_treat_malformed_file_as_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        fs::write(&path, "not json at all").unwrap();
        let books = JsonBookRepository::new(&path).load_all().expect("should load");
        assert!(books.is_empty());
    }

    #[test]
    fn test_should_keep_records_before_a_bad_one() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        fs::write(&path, r#"[{"id": 4, "title": "Dune", "author": "Herbert", "year": 1965, "available": true}, {"id": 5}]"#).unwrap();
        let books = JsonBookRepository::new(&path).load_all().expect("should load");
        assert_eq!(vec![BookEntity::new(4, "Dune", "Herbert", 1965)], books);
    }

    #[test]
    fn test_should_store_and_load_books() {
        let tmp = TempDir::new().unwrap();
        let repo = JsonBookRepository::new(&tmp.path().join("books.json"));
        let mut borrowed = BookEntity::new(2, "Hyperion", "Simmons", 1989);
        borrowed.available = false;
        let books = vec![BookEntity::new(1, "Dune", "Herbert", 1965), borrowed];
        repo.store_all(&books).expect("should store");
        assert_eq!(books, repo.load_all().expect("should load"));
    }

    #[test]
    fn test_should_fail_storing_when_path_is_blocked() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let repo = JsonBookRepository::new(&blocker.join("books.json"));
        let err = repo.store_all(&[BookEntity::new(1, "Dune", "Herbert", 1965)]).expect_err("should fail");
        assert!(matches!(err, LibraryError::Storage { .. }));
    }

    #[test]
    fn test_should_report_location() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        assert_eq!(path.display().to_string(), JsonBookRepository::new(&path).location());
    }
}
