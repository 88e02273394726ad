use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    Box::new(CatalogServiceImpl::new(config, book_repo))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_add_book() {
        let tmp = TempDir::new().unwrap();
        let config = Configuration::new(&tmp.path().join("books.json"));
        let mut catalog_svc = create_catalog_service(&config);

        let book = catalog_svc.add_book("Dune", "Herbert", 1965).expect("should add book");
        let loaded = catalog_svc.find_book_by_id(book.id).expect("should return book");
        assert_eq!(book.id, loaded.id);

        let reopened = create_catalog_service(&config);
        assert_eq!(1, reopened.list_books().len());
        assert_eq!(2, reopened.next_id());
    }

    #[test]
    fn test_should_not_touch_disk_with_memory_store() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.json");
        let config = Configuration::new(&path).with_store(RepositoryStore::Memory);
        let mut catalog_svc = create_catalog_service(&config);
        catalog_svc.add_book("Dune", "Herbert", 1965).expect("should add book");
        assert_eq!("memory", catalog_svc.location());
        assert!(!path.exists());
    }
}
