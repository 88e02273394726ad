use std::io;
use std::path::PathBuf;
use clap::Parser;
use tracing::error;
use lms_catalog::catalog::controller::ConsoleController;
use lms_catalog::catalog::factory::create_catalog_service;
use lms_catalog::core::domain::{Configuration, DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL};
use lms_catalog::core::repository::RepositoryStore;
use lms_catalog::utils::logs::setup_tracing;

/// Console catalog for a small library, persisted as a JSON file.
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
struct Args {
    /// JSON file holding the catalog
    #[arg(long, env = "LMS_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Where records are kept: `json` (the data file) or `memory` (discarded on exit)
    #[arg(long, env = "LMS_STORE", default_value = "json")]
    store: String,

    /// Maximum log level written to stderr
    #[arg(long, env = "LMS_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Write logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn configuration(&self) -> Configuration {
        Configuration::new(self.data_file.as_path())
            .with_store(RepositoryStore::from(self.store.clone()))
            .with_logging(self.log_level.as_str(), self.log_json)
    }
}

fn main() {
    let config = Args::parse().configuration();
    setup_tracing(&config);

    let mut catalog_svc = create_catalog_service(&config);
    let stdin = io::stdin();
    let code = match ConsoleController::new(stdin.lock(), io::stdout()).run(catalog_svc.as_mut()) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "console session failed");
            1
        }
    };
    std::process::exit(code);
}
