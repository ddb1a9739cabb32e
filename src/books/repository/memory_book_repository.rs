use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::memdb::MemoryClient;

#[derive(Debug)]
pub(crate) struct MemoryBookRepository {
    client: MemoryClient,
    table_name: String,
}

impl MemoryBookRepository {
    pub(crate) fn new(client: MemoryClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        self.client.put_item(self.table_name.as_str(), entity.id().as_str(), val).await
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut updated = entity.clone();
        updated.updated_at = Utc::now().naive_utc();
        let val = serde_json::to_value(&updated)?;
        self.client.update_item(self.table_name.as_str(), entity.id().as_str(), entity.version(), val).await
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let item = self.client.get_item(self.table_name.as_str(), id).await
            .map_err(|err| match err {
                LibraryError::NotFound { .. } => LibraryError::not_found(format!("book not found for {}", id).as_str()),
                other => other,
            })?;
        map_to_book(item)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.client.delete_item(self.table_name.as_str(), id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let res = self.client.scan(self.table_name.as_str(), predicate, page, page_size).await?;
        let records = res.records.into_iter().map(map_to_book).collect::<LibraryResult<Vec<BookEntity>>>()?;
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let predicate = HashMap::from([
            ("isbn".to_string(), isbn.to_string()),
        ]);
        let res = self.query(&predicate, None, 1).await?;
        Ok(res.records.into_iter().next())
    }

    async fn update_availability(&self, book_id: &str, delta: i64) -> LibraryResult<BookEntity> {
        let mut book = self.get(book_id).await?;
        let available = book.available_copies + delta;
        if available < 0 || available > book.total_copies {
            return Err(LibraryError::validation(
                format!("available copies of {} would become {} of {}", book_id, available, book.total_copies).as_str(),
                Some("400".to_string())));
        }
        book.available_copies = available;
        self.update(&book).await?;
        self.get(book_id).await
    }
}

fn map_to_book(item: Value) -> LibraryResult<BookEntity> {
    serde_json::from_value(item).map_err(LibraryError::from)
}
