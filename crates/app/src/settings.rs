//! Handles settings for the application.
//!
//! Settings come from `settings.toml` (optional), then `TALLY__*` environment
//! variables, then command line flags. See `settings.toml` for the keys.
use std::path::PathBuf;

use clap::Parser;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const ENV_PREFIX: &str = "TALLY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log filter level for the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub name: String,
    /// Version and author reported by the server resource.
    pub version: String,
    pub author: Option<String>,
    /// JSON file served as the category resource.
    pub categories: PathBuf,
    /// Pool size for file stores. In-memory stores always use one connection.
    pub max_connections: u32,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            name: "Expense Tracker Server".to_string(),
            version: "1.0.0".to_string(),
            author: None,
            categories: PathBuf::from("categories.json"),
            max_connections: 5,
            database: Database::Sqlite("/tmp/expenses.db".to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Expense and income ledger server")]
pub struct Args {
    /// Optional config file path (TOML), without extension is fine.
    #[arg(long, env = "TALLY_CONFIG")]
    config: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Args::parse())
    }

    fn load(args: Args) -> Result<Self, ConfigError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let mut settings = Self::from_builder(builder)?;
        settings.apply(args);
        Ok(settings)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    fn apply(&mut self, args: Args) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(level) = args.level {
            self.app.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Settings {
        Settings::from_builder(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn defaults() {
        let settings = from_toml("");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.server.name, "Expense Tracker Server");
        assert_eq!(settings.server.max_connections, 5);
        assert_eq!(settings.server.version, "1.0.0");
        assert_eq!(settings.server.author, None);
        assert_eq!(
            settings.server.database,
            Database::Sqlite("/tmp/expenses.db".to_string())
        );
    }

    #[test]
    fn memory_database() {
        let settings = from_toml(
            r#"
            [server]
            port = 9000
            author = "Nihal"
            database = "memory"
            "#,
        );
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.author.as_deref(), Some("Nihal"));
        assert_eq!(settings.server.database, Database::Memory);
        assert_eq!(settings.server.bind, "0.0.0.0");
    }

    #[test]
    fn sqlite_database() {
        let settings = from_toml(
            r#"
            [server]
            database = { sqlite = "data/ledger.db" }
            "#,
        );
        assert_eq!(
            settings.server.database,
            Database::Sqlite("data/ledger.db".to_string())
        );
    }

    #[test]
    fn cli_overrides() {
        let mut settings = from_toml("[app]\nlevel = \"warn\"\n");
        let args = Args::try_parse_from(["tally", "--port", "8123", "--level", "debug"]).unwrap();
        settings.apply(args);

        assert_eq!(settings.server.port, 8123);
        assert_eq!(settings.app.level, "debug");
    }
}
