pub mod memory_checkout_repository;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait CheckoutRepository : Repository<CheckoutEntity> {
    // books currently borrowed by the patron, with is_overdue evaluated at read time
    async fn find_borrowed_by_patron(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>>;

    async fn count_borrowed_by_patron(&self, patron_id: &str) -> LibraryResult<usize>;

    async fn mark_returned(&self, patron_id: &str, book_id: &str, returned_at: NaiveDateTime) -> LibraryResult<CheckoutEntity>;
}
