use std::path::PathBuf;
use clap::Parser;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_CATALOG_PATH: &str = "database.txt";

// CliArgs are the command line flags of the desk binary, each one can also come from env
#[derive(Debug, Clone, Parser)]
#[command(name = "library-desk")]
#[command(version, about = "Library catalog desk: borrow/return queue with undo", long_about = None)]
pub(crate) struct CliArgs {
    /// Catalog file loaded at startup and written back on exit
    #[arg(short, long, env = "LIBRARY_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Branch identifier attached to published events
    #[arg(short, long, env = "LIBRARY_BRANCH", default_value = "main")]
    pub branch: String,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, env = "LIBRARY_LOG", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as json lines
    #[arg(long)]
    pub log_json: bool,
}

// Configuration abstracts config options for library desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub catalog_path: PathBuf,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    pub fn from_args(args: &CliArgs) -> Self {
        Configuration {
            log_level: args.log_level.to_lowercase(),
            log_json: args.log_json,
            ..Configuration::new(args.branch.as_str())
        }.with_catalog_path(args.catalog.clone())
    }

    pub fn with_catalog_path(mut self, path: PathBuf) -> Self {
        self.catalog_path = path;
        self
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::WARN)
    }
}
