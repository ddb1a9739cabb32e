pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    // adds delta to available copies, keeping the count within [0, total_copies]
    async fn update_availability(&self, book_id: &str, delta: i64) -> LibraryResult<BookEntity>;
}
