// ABOUTME: Main library entry point for the CrankSmith drivetrain analysis API
// ABOUTME: Wires configuration, logging, middleware and routes around the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

#![deny(unsafe_code)]

//! # CrankSmith Server
//!
//! HTTP front end for drivetrain compatibility checks and setup comparisons.
//! The computation lives in `cranksmith-analysis`; this crate owns the
//! configuration, logging, middleware and route handlers.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cranksmith::config::environment::ServerConfig;
//! use cranksmith::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(&config)?);
//!     cranksmith::server::run(config, resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Error types and client-facing redaction
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: CORS, request ids, request logging
pub mod middleware;

/// Shared state for request handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
