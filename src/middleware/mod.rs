// ABOUTME: HTTP middleware for CORS, request correlation and request logging
// ABOUTME: Provides request ID generation, span creation and per-request access logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

/// Cross-origin configuration
pub mod cors;
/// Request IDs, spans and access logging
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and context management
pub use self::tracing::{create_request_span, log_requests, RequestIdGenerator};
