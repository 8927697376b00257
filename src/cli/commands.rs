//! CLI command implementations

use std::path::Path;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, Event};

use super::args::{Cli, Command, ServeOverrides};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config, overrides } => serve(&config, overrides),
    }
}

/// Write a default configuration file.
///
/// Refuses to overwrite an existing configuration file. The data file
/// itself is created by the store on its first write.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    Config::initial().save(config_path)?;
    println!("Wrote configuration to {}", config_path.display());
    Ok(())
}

/// Load configuration, open the store, and serve until shutdown.
pub fn serve(config_path: &Path, overrides: ServeOverrides) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(overrides);
    config.validate()?;

    init_logging(&config.log)?;
    info!(event = %Event::ConfigLoaded, path = %config_path.display(), "configuration loaded");

    let store = config.open_store()?;
    match &config.data_file {
        Some(path) => info!(
            event = %Event::StoreOpened,
            backend = "file",
            path = %path.display(),
            records = store.count()?,
            "record store opened"
        ),
        None => info!(event = %Event::StoreOpened, backend = "memory", "record store opened"),
    }

    let server = HttpServer::new(config.server.clone(), store);
    let metrics = server.metrics();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    let totals = metrics.snapshot();
    info!(
        creates = totals.creates,
        updates = totals.updates,
        deletes = totals.deletes,
        rejected = totals.rejected,
        "final request counters"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("framework-registry.json");

        init(&config_path).unwrap();

        assert_eq!(Config::load(&config_path).unwrap(), Config::initial());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("framework-registry.json");
        std::fs::write(&config_path, "{}").unwrap();

        let result = init(&config_path);
        assert!(matches!(result, Err(CliError::AlreadyInitialized(_))));
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "{}");
    }

    #[test]
    fn test_serve_rejects_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("framework-registry.json");
        std::fs::write(&config_path, r#"{"server": {"port": 0}}"#).unwrap();

        let result = serve(&config_path, ServeOverrides::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_serve_rejects_empty_host_override() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("absent.json");

        let overrides = ServeOverrides {
            host: Some(String::new()),
            ..Default::default()
        };
        let result = serve(&config_path, overrides);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
