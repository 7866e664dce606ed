//! Application configuration
//!
//! Loaded from an optional `config/default.toml` file with
//! `MAILTRIAGE__`-prefixed environment overrides, and serde defaults for
//! every field so a bare process still starts.

use std::path::PathBuf;

use ai_core::InferenceConfig;
use application::ApplicationError;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request body ceiling, which also caps uploads
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_body_bytes() -> usize {
    5 * 1024 * 1024 // 5MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Directory that stored uploads land in; created at startup
    #[serde(default = "default_uploads_dir")]
    pub dir: PathBuf,
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
        }
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Path of the append-only audit file
    #[serde(default = "default_audit_path")]
    pub path: PathBuf,
}

fn default_audit_path() -> PathBuf {
    PathBuf::from("audit.log")
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: default_audit_path(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload storage settings
    #[serde(default)]
    pub uploads: UploadsConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Remote inference settings
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from `config/default.toml` (optional) and
    /// `MAILTRIAGE__`-prefixed environment variables, then pick up the
    /// inference credential from `OPENAI_API_KEY` if the config carries
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when a present source
    /// cannot be read or deserialized.
    pub fn load() -> Result<Self, ApplicationError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::Environment::with_prefix("MAILTRIAGE").separator("__"))
            .build()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        let mut app_config: Self = settings
            .try_deserialize()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        app_config.inference = app_config.inference.with_env_credential();

        Ok(app_config)
    }
}
