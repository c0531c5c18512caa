use std::sync::Mutex;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct Catalog {
    books: Vec<BookEntity>,
    next_id: i64,
}

// MemoryBookRepository owns the catalog for the lifetime of the server. Every operation holds
// the lock for its whole duration so ids stay unique and below next_id.
#[derive(Debug)]
pub struct MemoryBookRepository {
    catalog: Mutex<Catalog>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        let next_id = books.iter().map(|b| b.id()).max().unwrap_or(0) + 1;
        Self {
            catalog: Mutex::new(Catalog { books, next_id }),
        }
    }
}

fn not_found(id: i64) -> LibraryError {
    LibraryError::book_not_found(id.to_string().as_str())
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.lock()?;
        let book = entity.clone().with_id(catalog.next_id);
        catalog.next_id += 1;
        catalog.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.lock()?;
        let existing = catalog.books.iter_mut()
            .find(|b| b.id() == entity.id())
            .ok_or_else(|| not_found(entity.id()))?;
        existing.title = entity.title.to_string();
        existing.author = entity.author.to_string();
        existing.year = entity.year;
        Ok(existing.clone())
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let catalog = self.catalog.lock()?;
        catalog.books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.lock()?;
        let ndx = catalog.books.iter()
            .position(|b| b.id() == id)
            .ok_or_else(|| not_found(id))?;
        Ok(catalog.books.remove(ndx))
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.catalog.lock()?.books.clone())
    }
}
