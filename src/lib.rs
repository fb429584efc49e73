pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{HttpInvoker, MemoryBackend};
pub use config::BridgeConfig;
pub use crate::core::{ConfigApi, ProductsApi, ProductsView};
pub use utils::cnpj::{clean_cnpj, format_cnpj};
pub use utils::error::{BridgeError, Result};
