use crate::config::toml_config::BridgeConfig;
use crate::core::products_view::{DECREMENT_STEP, INCREMENT_STEP, RENAME_TO};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rabbit-bridge")]
#[command(about = "Product and configuration client for the rabbit POS backend")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Backend base URL, overrides the config file")]
    pub backend_url: Option<String>,

    #[arg(long, help = "Request timeout, overrides the config file")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Use the in-process backend instead of HTTP")]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the product table
    List,
    /// Create a product
    Create { code: String, name: String },
    /// Add to a product balance
    Increment {
        id: i64,
        #[arg(default_value_t = INCREMENT_STEP)]
        amount: f64,
    },
    /// Subtract from a product balance
    Decrement {
        id: i64,
        #[arg(default_value_t = DECREMENT_STEP)]
        amount: f64,
    },
    /// Rename a product
    Rename {
        id: i64,
        #[arg(default_value = RENAME_TO)]
        name: String,
    },
    /// Mark a product inactive
    Delete { id: i64 },
    /// Show the default configuration
    Config,
    /// Look up a CNPJ
    Cnpj { value: String },
}

impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<BridgeConfig> {
        let mut config = match &self.config {
            Some(path) => BridgeConfig::from_file(path)?,
            None => BridgeConfig::default(),
        };

        if let Some(url) = &self.backend_url {
            config.backend.base_url = Some(url.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.backend.timeout_seconds = Some(timeout);
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}
