//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `CATALOGUE_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

fn default_definitions_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("courses")
}

/// Problems turning loaded settings into usable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// OrthoConfig could not merge the configuration sources.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Underlying loader error text.
        message: String,
    },
    /// No database connection string was provided.
    #[error("CATALOGUE_DATABASE_URL is not set")]
    MissingDatabaseUrl,
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddress {
        /// The rejected bind address.
        value: String,
        /// Why the address was rejected.
        message: String,
    },
    /// The definitions directory is not valid UTF-8.
    #[error("definitions directory {path:?} is not valid UTF-8")]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
}

/// Runtime settings for the catalogue service and its tools.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the HTTP server listens on.
    pub bind_address: Option<String>,
    /// Register `POST /courses/seed`.
    #[ortho_config(default = false)]
    pub seed_endpoint: bool,
    /// Register development-only diagnostics.
    #[ortho_config(default = false)]
    pub dev_endpoints: bool,
    /// Directory holding the course definition files.
    pub definitions_dir: Option<PathBuf>,
    /// Seed the definition files before accepting traffic.
    #[ortho_config(default = false)]
    pub seed_on_startup: bool,
}

impl AppSettings {
    /// Load settings for the program named `binary`, ignoring its real
    /// arguments.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Load`] when a source cannot be parsed.
    pub fn load_for(binary: &str) -> Result<Self, ConfigurationError> {
        Self::load_from_iter([OsString::from(binary)]).map_err(|err| ConfigurationError::Load {
            message: err.to_string(),
        })
    }

    /// Return the database URL.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MissingDatabaseUrl`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, ConfigurationError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigurationError::MissingDatabaseUrl)
    }

    /// Return the parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidBindAddress`] when the value does
    /// not parse.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigurationError> {
        let raw = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        raw.trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigurationError::InvalidBindAddress {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the definitions directory, falling back to the bundled
    /// fixtures.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NonUtf8Path`] for non UTF-8 overrides.
    pub fn definitions_dir(&self) -> Result<Utf8PathBuf, ConfigurationError> {
        match &self.definitions_dir {
            Some(path) => Utf8PathBuf::from_path_buf(path.clone())
                .map_err(|path| ConfigurationError::NonUtf8Path { path }),
            None => Ok(default_definitions_dir()),
        }
    }
}
