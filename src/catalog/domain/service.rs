use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, SearchKind};

const MAX_TITLE_LEN: usize = 200;
const MAX_AUTHOR_LEN: usize = 100;
const ISBN_LEN: usize = 13;
const PAGE_SIZE: usize = 100;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut book = book.clone();
        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();
        validate_book(&book)?;
        if self.book_repository.find_by_isbn(book.isbn.as_str()).await?.is_some() {
            return Err(LibraryError::duplicate_key("A book with this ISBN already exists."));
        }
        book.available_copies = book.total_copies;
        self.book_repository.create(&BookEntity::from(&book)).await?;
        info!(book_id = book.book_id.as_str(), isbn = book.isbn.as_str(), "added book to catalog");
        Ok(book)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.find_by_isbn(isbn).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let mut books = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = self.book_repository.query(&HashMap::new(), page.as_deref(), PAGE_SIZE).await?;
            books.extend(res.records.iter().map(BookDto::from));
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(books)
    }

    async fn search_books(&self, term: &str, kind: SearchKind) -> LibraryResult<Vec<BookDto>> {
        let needle = term.to_lowercase();
        match kind {
            SearchKind::Title => {
                let books = self.find_all_books().await?;
                Ok(books.into_iter().filter(|b| b.title.to_lowercase().contains(&needle)).collect())
            }
            SearchKind::Author => {
                let books = self.find_all_books().await?;
                Ok(books.into_iter().filter(|b| b.author.to_lowercase().contains(&needle)).collect())
            }
            SearchKind::Isbn => {
                Ok(self.find_book_by_isbn(term).await?.into_iter().collect())
            }
            SearchKind::Unknown => Ok(vec![]),
        }
    }

    async fn update_availability(&self, id: &str, delta: i64) -> LibraryResult<BookDto> {
        self.book_repository.update_availability(id, delta).await.map(|b| BookDto::from(&b))
    }
}

fn validate_book(book: &BookDto) -> LibraryResult<()> {
    if book.title.is_empty() {
        return Err(LibraryError::validation("Title is required.", None));
    }
    if book.title.chars().count() > MAX_TITLE_LEN {
        return Err(LibraryError::validation("Title must be less than 200 characters.", None));
    }
    if book.author.is_empty() {
        return Err(LibraryError::validation("Author is required.", None));
    }
    if book.author.chars().count() > MAX_AUTHOR_LEN {
        return Err(LibraryError::validation("Author must be less than 100 characters.", None));
    }
    if book.isbn.len() != ISBN_LEN || !book.isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err(LibraryError::validation("ISBN must be exactly 13 digits.", None));
    }
    if book.total_copies <= 0 {
        return Err(LibraryError::validation("Total copies must be a positive integer.", None));
    }
    Ok(())
}
