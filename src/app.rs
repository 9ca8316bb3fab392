//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{
    AssistantService, ChatCompletionClient, GenerativeContentClient, ScanService,
};

const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Errors that can occur during application initialization
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}

/// Application state containing all services
pub struct AppState {
    /// Scam classification service
    pub scan_service: Arc<ScanService>,
    /// Conversational assistant service
    pub assistant_service: Arc<AssistantService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires `GEMINI_API_KEY` in the environment for the classification
    /// backend; the chat backend is unauthenticated.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key =
            std::env::var(ENV_API_KEY).map_err(|_| AppError::MissingConfig(ENV_API_KEY))?;

        let classifier_backend = Arc::new(GenerativeContentClient::new(&config.llm, api_key));
        let chat_backend = Arc::new(ChatCompletionClient::new(&config.llm));

        tracing::info!(
            classifier_model = %config.llm.classifier_model,
            chat_endpoint = %config.llm.chat_endpoint,
            "Services initialized"
        );

        Ok(Self {
            scan_service: Arc::new(ScanService::new(classifier_backend)),
            assistant_service: Arc::new(AssistantService::new(chat_backend)),
        })
    }
}
