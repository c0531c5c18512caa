use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::parse_book_id;
use crate::books::dto::{BookDto, BookPayload};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::current_year;

pub struct CatalogServiceImpl {
    book_repository: Arc<BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Arc<BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

fn to_book_id(id: &str) -> LibraryResult<i64> {
    parse_book_id(id).ok_or_else(|| LibraryError::book_not_found(id))
}

// repository errors name the parsed id, clients expect the segment they sent
fn with_raw_id(id: &str) -> impl Fn(LibraryError) -> LibraryError + '_ {
    move |err| match err {
        LibraryError::NotFound { .. } => LibraryError::book_not_found(id),
        other => other,
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        let book_id = to_book_id(id)?;
        self.book_repository.get(book_id).await
            .map(|b| BookDto::from(&b))
            .map_err(with_raw_id(id))
    }

    async fn add_book(&self, book: &BookPayload) -> LibraryResult<BookDto> {
        let entity = book.build_book(current_year())?;
        let created = self.book_repository.create(&entity).await?;
        tracing::info!(book_id = created.id, "book created");
        Ok(BookDto::from(&created))
    }

    async fn update_book(&self, id: &str, book: &BookPayload) -> LibraryResult<BookDto> {
        let book_id = to_book_id(id)?;
        let _ = self.book_repository.get(book_id).await.map_err(with_raw_id(id))?;
        let entity = book.build_book(current_year())?.with_id(book_id);
        let updated = self.book_repository.update(&entity).await.map_err(with_raw_id(id))?;
        tracing::info!(book_id, "book updated");
        Ok(BookDto::from(&updated))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<BookDto> {
        let book_id = to_book_id(id)?;
        let removed = self.book_repository.delete(book_id).await.map_err(with_raw_id(id))?;
        tracing::info!(book_id, "book deleted");
        Ok(BookDto::from(&removed))
    }
}
