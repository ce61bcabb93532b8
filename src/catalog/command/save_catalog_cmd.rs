use std::path::PathBuf;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::persistence::save_catalog;
use crate::core::command::{Command, CommandError};

pub(crate) struct SaveCatalogCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SaveCatalogCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SaveCatalogCommandRequest {
    pub(crate) path: PathBuf,
}

impl SaveCatalogCommandRequest {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveCatalogCommandResponse {
    pub saved: usize,
}

#[async_trait]
impl Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand {
    async fn execute(&self, req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        let saved = save_catalog(req.path.as_path(), self.catalog_service.as_ref()).await?;
        Ok(SaveCatalogCommandResponse { saved })
    }
}
