use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RecommendBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RecommendBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendBooksCommandRequest {
    pub(crate) isbn: String,
}

impl RecommendBooksCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendBooksCommandResponse {
    pub source: BookDto,
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<RecommendBooksCommandRequest, RecommendBooksCommandResponse> for RecommendBooksCommand {
    async fn execute(&self, req: RecommendBooksCommandRequest) -> Result<RecommendBooksCommandResponse, CommandError> {
        let source = self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?;
        let books = self.catalog_service.recommend(req.isbn.as_str()).await?;
        Ok(RecommendBooksCommandResponse { source, books })
    }
}
