// ABOUTME: JSON body extractor that reports parse failures as AppError responses
// ABOUTME: Keeps malformed bodies on the same error shape as every other failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use crate::errors::AppError;
use axum::extract::FromRequest;

/// `axum::Json` whose rejection is a 400 `INVALID_INPUT` (413 when oversized)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
