use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Id carried by a book that the catalog has not stored yet.
pub const UNASSIGNED_ID: i64 = 0;

// BookEntity is a single record of the in-memory catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: Option<i64>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// The books every catalog starts out with, ids 1 to 3.
    pub fn seed() -> Vec<BookEntity> {
        vec![
            BookEntity::new("The Great Gatsby", "F. Scott Fitzgerald", Some(1925)).with_id(1),
            BookEntity::new("To Kill a Mockingbird", "Harper Lee", Some(1960)).with_id(2),
            BookEntity::new("1984", "George Orwell", Some(1949)).with_id(3),
        ]
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}
