use std::path::PathBuf;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::persistence::load_catalog;
use crate::core::command::{Command, CommandError};

pub(crate) struct LoadCatalogCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl LoadCatalogCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LoadCatalogCommandRequest {
    pub(crate) path: PathBuf,
}

impl LoadCatalogCommandRequest {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoadCatalogCommandResponse {
    pub loaded: usize,
    pub skipped: Vec<String>,
}

#[async_trait]
impl Command<LoadCatalogCommandRequest, LoadCatalogCommandResponse> for LoadCatalogCommand {
    async fn execute(&self, req: LoadCatalogCommandRequest) -> Result<LoadCatalogCommandResponse, CommandError> {
        let report = load_catalog(req.path.as_path(), self.catalog_service.as_ref()).await?;
        Ok(LoadCatalogCommandResponse {
            loaded: report.loaded,
            skipped: report.skipped.iter().map(|e| e.to_string()).collect(),
        })
    }
}
