use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) total_copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, total_copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.total_copies)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = format!("Book \"{}\" has been successfully added to the catalog.", book.title);
        Self {
            book,
            message,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::memdb::MemoryClient;

    async fn build_command() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), &MemoryClient::new()).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = build_command().await;
        let res = cmd.execute(AddBookCommandRequest::new("Dune ", "Frank Herbert", "9780441172719", 2))
            .await.expect("should add book");
        assert_eq!("Book \"Dune\" has been successfully added to the catalog.", res.message.as_str());
        assert_eq!(2, res.book.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_add_duplicate_book() {
        let cmd = build_command().await;
        cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "9780441172719", 2))
            .await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "9780441172719", 2)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
