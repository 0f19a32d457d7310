//! Configuration management
//!
//! Configuration lives in a TOML file (default `postfetch.toml`) with four
//! sections: `[application]`, `[source]`, `[storage]`, and `[export]`. Every
//! field has a sensible default, so a missing file or an empty file is a
//! valid configuration.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, ExportConfig, PostFetchConfig, SourceConfig, StorageConfig};
