// ABOUTME: Configuration management module for server settings and analysis parameters
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

//! Configuration module for the CrankSmith server
//!
//! All settings come from environment variables; command-line flags on the
//! server binary override a few of them.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ServerConfig};
