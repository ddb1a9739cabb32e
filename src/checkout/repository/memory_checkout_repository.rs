use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde_json::Value;

use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::memdb::MemoryClient;

const PAGE_SIZE: usize = 100;

#[derive(Debug)]
pub(crate) struct MemoryCheckoutRepository {
    client: MemoryClient,
    table_name: String,
}

impl MemoryCheckoutRepository {
    pub(crate) fn new(client: MemoryClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    async fn query_all(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<CheckoutEntity>> {
        let mut records = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = self.query(predicate, page.as_deref(), PAGE_SIZE).await?;
            records.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl Repository<CheckoutEntity> for MemoryCheckoutRepository {
    async fn create(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        self.client.put_item(self.table_name.as_str(), entity.id().as_str(), val).await
    }

    async fn update(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut updated = entity.clone();
        updated.updated_at = Utc::now().naive_utc();
        let val = serde_json::to_value(&updated)?;
        self.client.update_item(self.table_name.as_str(), entity.id().as_str(), entity.version(), val).await
    }

    async fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        let item = self.client.get_item(self.table_name.as_str(), id).await
            .map_err(|err| match err {
                LibraryError::NotFound { .. } => LibraryError::not_found(format!("checkout not found for {}", id).as_str()),
                other => other,
            })?;
        map_to_checkout(item)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.client.delete_item(self.table_name.as_str(), id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutEntity>> {
        let res = self.client.scan(self.table_name.as_str(), predicate, page, page_size).await?;
        let records = res.records.into_iter().map(map_to_checkout).collect::<LibraryResult<Vec<CheckoutEntity>>>()?;
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

#[async_trait]
impl CheckoutRepository for MemoryCheckoutRepository {
    async fn find_borrowed_by_patron(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        let predicate = HashMap::from([
            ("patron_id".to_string(), patron_id.to_string()),
            ("checkout_status".to_string(), CheckoutStatus::CheckedOut.to_string()),
        ]);
        let now = Utc::now().naive_utc();
        let mut records = self.query_all(&predicate).await?;
        for record in records.iter_mut() {
            record.is_overdue = record.overdue_at(now);
        }
        Ok(records)
    }

    async fn count_borrowed_by_patron(&self, patron_id: &str) -> LibraryResult<usize> {
        self.find_borrowed_by_patron(patron_id).await.map(|records| records.len())
    }

    async fn mark_returned(&self, patron_id: &str, book_id: &str, returned_at: NaiveDateTime) -> LibraryResult<CheckoutEntity> {
        let mut existing = self.find_borrowed_by_patron(patron_id).await?
            .into_iter()
            .find(|c| c.book_id == book_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("checkout of book {} for patron {} not found", book_id, patron_id).as_str()))?;
        existing.checkout_status = CheckoutStatus::Returned;
        existing.returned_at = Some(returned_at);
        existing.is_overdue = false;
        self.update(&existing).await?;
        self.get(existing.checkout_id.as_str()).await
    }
}

fn map_to_checkout(item: Value) -> LibraryResult<CheckoutEntity> {
    serde_json::from_value(item).map_err(LibraryError::from)
}
