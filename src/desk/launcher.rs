use std::io;
use clap::Parser;
use tracing::{error, info, warn};
use crate::core::domain::{CliArgs, Configuration};
use crate::core::repository::RepositoryStore;
use crate::desk::console::run_console;
use crate::desk::controller::{self, AppState};
use crate::utils::logging::setup_tracing;

// launch parses flags, loads the catalog and runs the menu on stdin/stdout.
// Every failure is reported and the process still ends normally.
pub async fn launch() {
    let args = CliArgs::parse();
    let config = Configuration::from_args(&args);
    setup_tracing(&config);
    info!(branch = config.branch_id.as_str(), catalog = %config.catalog_path.display(), "starting desk");

    let state = AppState::new(config, RepositoryStore::in_memory());
    match controller::load_catalog(&state).await {
        Ok(msg) => println!("{}", msg),
        Err(msg) => {
            warn!("catalog not loaded, starting empty");
            println!("{}", msg);
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(err) = run_console(&state, &mut input, &mut output).await {
        error!("console stopped: {}", err);
    }
}
