use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::utils::memdb::MemoryClient;

pub(crate) async fn create_catalog_service(config: &Configuration, client: &MemoryClient) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(client).await;
    Box::new(CatalogServiceImpl::new(config, book_repo))
}
