use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// GetBookCommandRequest looks a book up by isbn, or by title when no isbn is given
#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: Option<String>,
    pub(crate) title: Option<String>,
}

impl GetBookCommandRequest {
    pub fn by_isbn(isbn: &str) -> Self {
        Self {
            isbn: Some(isbn.to_string()),
            title: None,
        }
    }

    pub fn by_title(title: &str) -> Self {
        Self {
            isbn: None,
            title: Some(title.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let res = match (req.isbn, req.title) {
            (Some(isbn), _) => self.catalog_service.find_book_by_isbn(isbn.as_str()).await,
            (None, Some(title)) => self.catalog_service.find_book_by_title(title.as_str()).await,
            (None, None) => {
                return Err(CommandError::Validation {
                    message: "isbn or title is required".to_string(),
                    reason_code: Some("400".to_string()),
                });
            }
        };
        res.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
