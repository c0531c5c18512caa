pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookPayload};
use crate::core::library::LibraryResult;

// Ids are taken as the raw path segment so that not-found messages can echo what the client sent.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &BookPayload) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, book: &BookPayload) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<BookDto>;
}
