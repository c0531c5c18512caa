use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookBody, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_CREATED: &str = "Book created successfully";

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub body: BookBody,
}

impl AddBookCommandRequest {
    pub fn new(body: BookBody) -> Self {
        Self {
            body,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub success: bool,
    pub message: String,
    pub data: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(data: BookDto) -> Self {
        Self {
            success: true,
            message: BOOK_CREATED.to_string(),
            data,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.body.decode()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
