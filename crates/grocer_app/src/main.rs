mod config;
mod logging;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use grocer_engine::{startup, SessionRunner, StoreIoError};
use grocer_logging::{grocer_error, grocer_info, grocer_warn};

use crate::config::{ConfigSource, GrocerConfig};

fn main() -> ExitCode {
    let (config, source) = config::load_config(Path::new("."));
    logging::initialize(config.log);

    match &source {
        ConfigSource::Defaults => grocer_info!("No config file, using defaults"),
        ConfigSource::File(path) => grocer_info!("Loaded config from {:?}", path),
        ConfigSource::Fallback { path, reason } => {
            grocer_warn!("Ignoring config {:?}: {}", path, reason);
            eprintln!("Warning: ignoring {}: {}", path.display(), reason);
        }
    }

    match run(&config) {
        Ok(code) => code,
        Err(err) => {
            grocer_error!("{:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GrocerConfig) -> anyhow::Result<ExitCode> {
    let store = match startup(&config.input_path, &config.backup_path) {
        Ok(store) => store,
        Err(err) => {
            report_startup_failure(&err, config);
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    SessionRunner::new(&store, stdin.lock(), stdout.lock())
        .with_histogram_symbol(config.histogram_symbol)
        .run()
        .context("interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}

fn report_startup_failure(err: &StoreIoError, config: &GrocerConfig) {
    grocer_error!("Startup failed: {}", err);
    eprintln!("Error: {err}");
    match err {
        StoreIoError::Create { .. } | StoreIoError::Write { .. } => eprintln!(
            "Tip: make sure the folder for \"{}\" exists and is writable.",
            config.backup_path.display()
        ),
        _ => eprintln!(
            "Tip: place \"{}\" in the project's working directory.",
            config.input_path.display()
        ),
    }
}
