use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookBody, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_UPDATED: &str = "Book updated successfully";

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Updates replace title, author and year together, there is no partial update.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub body: BookBody,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, body: BookBody) -> Self {
        Self {
            book_id: book_id.to_string(),
            body,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub success: bool,
    pub message: String,
    pub data: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(data: BookDto) -> Self {
        Self {
            success: true,
            message: BOOK_UPDATED.to_string(),
            data,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        // a missing book wins over anything wrong with the body
        let _ = self.catalog_service.find_book_by_id(req.book_id.as_str()).await?;
        let book = req.body.decode()?;
        self.catalog_service.update_book(req.book_id.as_str(), &book)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::{json, Value};
    use crate::books::dto::{BookBody, JSON_CONTENT_TYPE};
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{BOOK_UPDATED, UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref CMDS : AsyncOnce<(AddBookCommand, UpdateBookCommand)> = AsyncOnce::new(async {
                let repo = create_book_repository();
                let config = Configuration::new("test");
                (AddBookCommand::new(factory::create_catalog_service(&config, repo.clone())),
                 UpdateBookCommand::new(factory::create_catalog_service(&config, repo)))
            });
    }

    fn json_body(value: Value) -> BookBody {
        BookBody::new(Some(JSON_CONTENT_TYPE), value.to_string().as_bytes())
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let (add_cmd, update_cmd) = CMDS.get().await;

        let added = add_cmd.execute(AddBookCommandRequest::new(json_body(json!({"title": "test book", "author": "someone"}))))
            .await.expect("should add book");
        let id = added.data.id.to_string();
        let res = update_cmd.execute(UpdateBookCommandRequest::new(id.as_str(), json_body(json!({"title": "Emma", "author": "Austen", "year": 1815}))))
            .await.expect("should update book");
        assert_eq!(BOOK_UPDATED, res.message.as_str());
        assert_eq!(added.data.id, res.data.id);
        assert_eq!("Emma", res.data.title.as_str());
        assert_eq!(Some(1815), res.data.year);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let (_, update_cmd) = CMDS.get().await;

        let err = update_cmd.execute(UpdateBookCommandRequest::new("9999", json_body(json!({"title": "Emma", "author": "Austen"}))))
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_should_report_missing_book_before_bad_body() {
        let (_, update_cmd) = CMDS.get().await;

        let malformed = BookBody::new(Some(JSON_CONTENT_TYPE), b"{oops");
        let err = update_cmd.execute(UpdateBookCommandRequest::new("9999", malformed.clone()))
            .await.expect_err("should fail");
        assert_eq!(CommandError::NotFound { message: "Book with ID 9999 not found".to_string() }, err);

        let err = update_cmd.execute(UpdateBookCommandRequest::new("9999", json_body(json!({}))))
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));

        let err = update_cmd.execute(UpdateBookCommandRequest::new("1", malformed))
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::Serialization { .. }));
    }
}
