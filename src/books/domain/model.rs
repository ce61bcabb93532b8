use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored catalog record of a title; stock counts the copies on the shelf.
// Only stock changes after the record is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub stock: i64,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str, stock: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            stock,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn stock(&self) -> i64 {
        self.stock
    }
}
