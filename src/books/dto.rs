use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub stock: i64,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, genre: &str, stock: i64) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            stock,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn genre(&self) -> &str {
        self.genre.as_str()
    }

    fn stock(&self) -> i64 {
        self.stock
    }
}

// GenreShelfDto groups the books of one genre in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct GenreShelfDto {
    pub genre: String,
    pub books: Vec<BookDto>,
}

impl GenreShelfDto {
    pub fn new(genre: &str, books: Vec<BookDto>) -> Self {
        Self {
            genre: genre.to_string(),
            books,
        }
    }
}
