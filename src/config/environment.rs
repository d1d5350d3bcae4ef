// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, CORS, catalog and analysis settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config};
use anyhow::{bail, Context, Result};
use cranksmith_analysis::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; internal error details are returned to clients
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*`
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// JSON catalog file; `None` uses the embedded catalog
    pub catalog_path: Option<PathBuf>,
    /// CORS settings
    pub cors: CorsConfig,
    /// Request body limit in bytes
    pub max_request_body_bytes: usize,
    /// Analysis engine parameters
    pub analysis: AnalysisConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            catalog_path: None,
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            max_request_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or out-of-range value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let chainstay_length_mm: f64 = env_var_or(
            env_config::CHAINSTAY_LENGTH_MM,
            &defaults::CHAINSTAY_LENGTH_MM.to_string(),
        )
        .parse()
        .context("Invalid CHAINSTAY_LENGTH_MM value")?;
        if !chainstay_length_mm.is_finite() || chainstay_length_mm <= 0.0 {
            bail!("CHAINSTAY_LENGTH_MM must be a positive number, got {chainstay_length_mm}");
        }

        let max_request_body_bytes = env_var_or(
            env_config::MAX_REQUEST_BODY_BYTES,
            &defaults::MAX_REQUEST_BODY_BYTES.to_string(),
        )
        .parse()
        .context("Invalid MAX_REQUEST_BODY_BYTES value")?;

        let environment = env::var(env_config::ENVIRONMENT)
            .or_else(|_| env::var(env_config::NODE_ENV))
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let catalog_path = env::var(env_config::CATALOG_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            http_port,
            host: env_var_or(env_config::HOST, defaults::HOST),
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            catalog_path,
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_config::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            max_request_body_bytes,
            analysis: AnalysisConfig::default().with_chainstay_length(chainstay_length_mm),
        })
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "CrankSmith Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Catalog: {}\n\
             - CORS Origins: {}\n\
             - Max Body: {} bytes\n\
             - Chainstay: {} mm",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.catalog_path
                .as_ref()
                .map_or_else(|| "embedded".to_owned(), |p| p.display().to_string()),
            self.cors.allowed_origins,
            self.max_request_body_bytes,
            self.analysis.chainstay_length_mm,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
#[must_use]
pub fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
