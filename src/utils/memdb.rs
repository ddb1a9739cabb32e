use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;
use serde_json::Value;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};

type Table = BTreeMap<String, Value>;

/// In-process table store used as the persistence backend of the repositories.
///
/// Items are kept as JSON documents keyed by their primary key, so each repository
/// serializes its entity the same way it would for a remote document store. Clones share
/// the same tables.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryClient {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl MemoryClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // creating an existing table is a no-op
    pub(crate) async fn create_table(&self, table_name: &str) {
        let mut tables = self.tables.write().await;
        tables.entry(table_name.to_string()).or_default();
    }

    pub(crate) async fn delete_table(&self, table_name: &str) -> LibraryResult<()> {
        let mut tables = self.tables.write().await;
        tables.remove(table_name)
            .map(|_| ())
            .ok_or_else(|| LibraryError::not_found(format!("table {} not found", table_name).as_str()))
    }

    pub(crate) async fn put_item(&self, table_name: &str, key: &str, item: Value) -> LibraryResult<usize> {
        let mut tables = self.tables.write().await;
        let table = table_mut(&mut tables, table_name)?;
        if table.contains_key(key) {
            return Err(LibraryError::duplicate_key(
                format!("{} already exists in {}", key, table_name).as_str()));
        }
        table.insert(key.to_string(), item);
        Ok(1)
    }

    // replaces the item only when the stored version is expected_version and bumps the version
    pub(crate) async fn update_item(&self, table_name: &str, key: &str, expected_version: i64,
                                    mut item: Value) -> LibraryResult<usize> {
        let mut tables = self.tables.write().await;
        let table = table_mut(&mut tables, table_name)?;
        let existing = table.get(key)
            .ok_or_else(|| LibraryError::not_found(format!("{} not found in {}", key, table_name).as_str()))?;
        let old_version = parse_version(existing);
        if old_version != expected_version {
            return Err(LibraryError::database(
                format!("stale version for {} in {}", key, table_name).as_str(),
                Some("ConditionalCheckFailed".to_string()), false));
        }
        if let Value::Object(ref mut map) = item {
            map.insert("version".to_string(), Value::from(old_version + 1));
        }
        table.insert(key.to_string(), item);
        Ok(1)
    }

    pub(crate) async fn get_item(&self, table_name: &str, key: &str) -> LibraryResult<Value> {
        let tables = self.tables.read().await;
        let table = table_ref(&tables, table_name)?;
        table.get(key)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("{} not found in {}", key, table_name).as_str()))
    }

    pub(crate) async fn delete_item(&self, table_name: &str, key: &str) -> LibraryResult<usize> {
        let mut tables = self.tables.write().await;
        let table = table_mut(&mut tables, table_name)?;
        table.remove(key)
            .map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("{} not found in {}", key, table_name).as_str()))
    }

    // scans in key order; the page token is the key of the last item of the previous page
    pub(crate) async fn scan(&self, table_name: &str, predicate: &HashMap<String, String>,
                             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Value>> {
        let tables = self.tables.read().await;
        let table = table_ref(&tables, table_name)?;
        let start = match page {
            Some(token) => Bound::Excluded(token.to_string()),
            None => Bound::Unbounded,
        };
        let mut records = vec![];
        let mut last_key: Option<&String> = None;
        let mut next_page = None;
        for (key, item) in table.range::<String, _>((start, Bound::Unbounded)) {
            if !matches_predicate(item, predicate) {
                continue;
            }
            if records.len() == page_size {
                next_page = last_key.cloned();
                break;
            }
            records.push(item.clone());
            last_key = Some(key);
        }
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

fn table_ref<'a>(tables: &'a HashMap<String, Table>, table_name: &str) -> LibraryResult<&'a Table> {
    tables.get(table_name)
        .ok_or_else(|| LibraryError::database(format!("table {} does not exist", table_name).as_str(),
                                              Some("ResourceNotFound".to_string()), false))
}

fn table_mut<'a>(tables: &'a mut HashMap<String, Table>, table_name: &str) -> LibraryResult<&'a mut Table> {
    tables.get_mut(table_name)
        .ok_or_else(|| LibraryError::database(format!("table {} does not exist", table_name).as_str(),
                                              Some("ResourceNotFound".to_string()), false))
}

fn parse_version(item: &Value) -> i64 {
    item.get("version").and_then(Value::as_i64).unwrap_or(0)
}

pub(crate) fn matches_predicate(item: &Value, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match item.get(k) {
        Some(Value::String(s)) => s == v,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == *v,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde_json::json;
    use crate::core::library::LibraryError;
    use crate::utils::memdb::{matches_predicate, MemoryClient};

    async fn build_client() -> MemoryClient {
        let client = MemoryClient::new();
        client.create_table("books").await;
        client
    }

    #[tokio::test]
    async fn test_should_put_and_get_item() {
        let client = build_client().await;
        client.put_item("books", "b1", json!({"book_id": "b1", "version": 0})).await.expect("should put");
        let item = client.get_item("books", "b1").await.expect("should get");
        assert_eq!("b1", item["book_id"]);
        let res = client.put_item("books", "b1", json!({"book_id": "b1"})).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_update_with_version_check() {
        let client = build_client().await;
        client.put_item("books", "b1", json!({"book_id": "b1", "version": 0})).await.expect("should put");
        client.update_item("books", "b1", 0, json!({"book_id": "b1", "version": 0, "title": "new"})).await.expect("should update");
        let item = client.get_item("books", "b1").await.expect("should get");
        assert_eq!(1, item["version"]);
        let res = client.update_item("books", "b1", 0, json!({"book_id": "b1", "version": 0})).await;
        assert!(matches!(res, Err(LibraryError::Database { .. })));
        let res = client.update_item("books", "missing", 0, json!({"book_id": "missing"})).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_delete_item() {
        let client = build_client().await;
        client.put_item("books", "b1", json!({"book_id": "b1"})).await.expect("should put");
        client.delete_item("books", "b1").await.expect("should delete");
        assert!(matches!(client.get_item("books", "b1").await, Err(LibraryError::NotFound { .. })));
        assert!(client.delete_item("books", "b1").await.is_err());
    }

    #[tokio::test]
    async fn test_should_scan_pages() {
        let client = build_client().await;
        for i in 0..5 {
            let key = format!("b{}", i);
            client.put_item("books", key.as_str(), json!({"book_id": key, "shelf": i % 2})).await.expect("should put");
        }
        let first = client.scan("books", &HashMap::new(), None, 2).await.expect("should scan");
        assert_eq!(2, first.records.len());
        assert_eq!(Some("b1".to_string()), first.next_page);
        let second = client.scan("books", &HashMap::new(), first.next_page.as_deref(), 2).await.expect("should scan");
        assert_eq!("b2", second.records[0]["book_id"]);
        let last = client.scan("books", &HashMap::new(), Some("b3"), 2).await.expect("should scan");
        assert_eq!(1, last.records.len());
        assert_eq!(None, last.next_page);

        let even = client.scan("books", &HashMap::from([("shelf".to_string(), "0".to_string())]), None, 10)
            .await.expect("should scan");
        assert_eq!(3, even.records.len());
    }

    #[tokio::test]
    async fn test_should_fail_on_missing_table() {
        let client = MemoryClient::new();
        assert!(client.get_item("unknown", "b1").await.is_err());
        assert!(client.delete_table("unknown").await.is_err());
    }

    #[tokio::test]
    async fn test_should_match_predicate() {
        let item = json!({"patron_id": "123456", "copies": 3, "returned_at": null});
        assert!(matches_predicate(&item, &HashMap::from([("patron_id".to_string(), "123456".to_string())])));
        assert!(matches_predicate(&item, &HashMap::from([("copies".to_string(), "3".to_string())])));
        assert!(!matches_predicate(&item, &HashMap::from([("returned_at".to_string(), "null".to_string())])));
        assert!(!matches_predicate(&item, &HashMap::from([("missing".to_string(), "x".to_string())])));
    }
}
