use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::utils::memdb::MemoryClient;

pub(crate) async fn create_book_repository(client: &MemoryClient) -> Box<dyn BookRepository> {
    client.create_table("books").await;
    Box::new(MemoryBookRepository::new(client.clone(), "books"))
}
