use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

pub const DEFAULT_DATA_FILE: &str = "data/books.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the catalog process. It is built once at
// startup and passed explicitly to whatever needs it.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub store: RepositoryStore,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
            store: RepositoryStore::JsonFile,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_logging(mut self, log_level: &str, log_json: bool) -> Self {
        self.log_level = log_level.to_string();
        self.log_json = log_json;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Path::new(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!(Path::new("data/books.json"), config.data_file.as_path());
        assert_eq!(RepositoryStore::JsonFile, config.store);
        assert_eq!("warn", config.log_level.as_str());
        assert!(!config.log_json);
    }

    #[test]
    fn test_should_override_store_and_logging() {
        let config = Configuration::new(Path::new("/tmp/catalog.json"))
            .with_store(RepositoryStore::Memory)
            .with_logging("debug", true);
        assert_eq!(RepositoryStore::Memory, config.store);
        assert_eq!("debug", config.log_level.as_str());
        assert!(config.log_json);
    }
}
