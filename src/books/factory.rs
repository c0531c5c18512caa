use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

// Every repository starts from the seed books, so each server start begins with ids 1 to 3.
pub fn create_book_repository() -> Arc<BookRepository> {
    Arc::new(MemoryBookRepository::new(BookEntity::seed()))
}
