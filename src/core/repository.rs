use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository keeps a whole collection in one backing location. Writes replace the previous
// content entirely; there is no incremental update.
pub trait Repository<Entity> {
    // reads every entity from the backing location
    fn load_all(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the backing location with exactly these entities, in order
    fn store_all(&self, entities: &[Entity]) -> LibraryResult<()>;

    // describes the backing location, e.g. a file path
    fn location(&self) -> String;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => RepositoryStore::Memory,
            _ => RepositoryStore::JsonFile,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "json"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}
