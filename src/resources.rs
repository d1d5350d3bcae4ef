// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the read-only component catalog and the analysis configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CrankSmith Contributors

use crate::config::environment::{Environment, ServerConfig};
use crate::errors::{for_client, AppError, AppResult};
use crate::logging::AppLogger;
use cranksmith_analysis::{AnalysisConfig, ComponentCatalog, StaticCatalog};
use std::sync::Arc;

/// State shared by all request handlers.
///
/// Nothing here is mutated after startup; replacing the catalog means building
/// a new `ServerResources`.
#[derive(Clone)]
pub struct ServerResources {
    /// Component catalog
    pub catalog: Arc<dyn ComponentCatalog>,
    /// Analysis parameters
    pub analysis: AnalysisConfig,
    /// Deployment environment, used for error redaction
    pub environment: Environment,
}

impl ServerResources {
    /// Bundle resources
    #[must_use]
    pub fn new(
        catalog: Arc<dyn ComponentCatalog>,
        analysis: AnalysisConfig,
        environment: Environment,
    ) -> Self {
        Self {
            catalog,
            analysis,
            environment,
        }
    }

    /// Load the catalog named by the configuration and bundle it with the settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the catalog cannot be read or fails validation
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let (catalog, source) = match &config.catalog_path {
            Some(path) => (
                StaticCatalog::from_path(path)?,
                path.display().to_string(),
            ),
            None => (StaticCatalog::embedded()?, "embedded".to_owned()),
        };

        AppLogger::log_catalog_loaded(
            &source,
            catalog.cranksets().len(),
            catalog.cassettes().len(),
            catalog.rear_derailleurs().len(),
        );

        Ok(Self::new(
            Arc::new(catalog),
            config.analysis.clone(),
            config.environment,
        ))
    }

    /// Apply the environment's redaction policy to an error
    #[must_use]
    pub fn client_error(&self, error: AppError) -> AppError {
        for_client(error, self.environment)
    }
}
