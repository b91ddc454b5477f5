//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that an empty
//! source still yields a runnable configuration.

pub mod access;
pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::access::AccessConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, RegistryConfig, RegistryProvider};
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`CODEVAULT__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "CODEVAULT";

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (base TOML file + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// File registry backend selection.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Access-code enforcement settings.
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges the base file at `path` (extension optional), an optional
    /// `config/{env}` overlay, and environment variables prefixed with
    /// `CODEVAULT__`. Missing files are skipped.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let base = path.trim_end_matches(".toml");

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allowed_origins")
                    .with_list_parse_key("server.cors.allowed_methods")
                    .with_list_parse_key("server.cors.allowed_headers"),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML string.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config should parse");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.blob_root, "./uploads");
        assert_eq!(config.registry.provider, RegistryProvider::Postgres);
        assert!(!config.access.require_code_for_delete);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9000

            [registry]
            provider = "memory"

            [storage]
            blob_root = "/var/lib/codevault/blobs"
            max_files_per_upload = 3

            [access]
            require_code_for_delete = true
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.registry.provider, RegistryProvider::Memory);
        assert_eq!(config.storage.blob_root, "/var/lib/codevault/blobs");
        assert_eq!(config.storage.max_files_per_upload, 3);
        assert!(config.access.require_code_for_delete);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = AppConfig::from_toml("[registry]\nprovider = \"mongo\"\n");
        assert!(result.is_err());
    }
}
