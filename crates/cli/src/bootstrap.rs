use stub_dns_domain::config::records;
use stub_dns_domain::{CliOverrides, Config, RecordTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// RUST_LOG wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn load_record_table(path: Option<&str>) -> anyhow::Result<RecordTable> {
    let table = match path {
        Some(path) => {
            let table = records::table_from_file(path)?;
            info!(file = %path, entries = table.len(), "Record table loaded");
            table
        }
        None => {
            let table = RecordTable::builtin();
            info!(entries = table.len(), "Using built-in record table");
            table
        }
    };
    Ok(table)
}
