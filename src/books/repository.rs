pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub type BookRepository = dyn Repository<BookEntity>;
