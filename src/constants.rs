// ABOUTME: Server-level constants: environment variable names and configuration defaults
// ABOUTME: Re-exports the drivetrain and service constants from the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! # Constants Module
//!
//! Environment variable names and the defaults applied when they are unset.

pub use cranksmith_core::constants::{drivetrain, recommendations, service_names};

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_config {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Fallback deployment environment variable
    pub const NODE_ENV: &str = "NODE_ENV";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Catalog JSON file
    pub const CATALOG_PATH: &str = "CATALOG_PATH";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Chainstay length for chain estimates
    pub const CHAINSTAY_LENGTH_MM: &str = "CHAINSTAY_LENGTH_MM";
    /// Request body limit
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Defaults for unset environment variables
pub mod defaults {
    use super::drivetrain;

    /// Listen port
    pub const HTTP_PORT: u16 = 8080;
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// 64 KiB is far above any valid comparison request
    pub const MAX_REQUEST_BODY_BYTES: usize = 65_536;
    /// Chainstay length in millimeters
    pub const CHAINSTAY_LENGTH_MM: f64 = drivetrain::DEFAULT_CHAINSTAY_LENGTH_MM;
}

/// Request correlation header
pub const REQUEST_ID_HEADER: &str = "x-request-id";
