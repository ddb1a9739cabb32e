pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronReportDto;

#[async_trait]
pub(crate) trait PatronService: Sync + Send {
    async fn status_report(&self, patron_id: &str) -> LibraryResult<PatronReportDto>;
}
