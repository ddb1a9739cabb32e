pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, SearchKind};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, term: &str, kind: SearchKind) -> LibraryResult<Vec<BookDto>>;
    async fn update_availability(&self, id: &str, delta: i64) -> LibraryResult<BookDto>;
}
