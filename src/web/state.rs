// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::config::GeminiConfig;
use crate::error::Result;
use crate::llm::{GeminiClient, TextGenerator};
use crate::service::ResearchService;

/// Shared application state (read-only after startup)
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ResearchService>,
}

impl AppState {
    /// Create state around an existing service
    pub fn new(service: ResearchService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Create state backed by any text generator
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(ResearchService::new(generator))
    }

    /// Create state backed by the Gemini API
    pub fn from_gemini_config(config: GeminiConfig) -> Result<Self> {
        let client = GeminiClient::new(config)?;
        Ok(Self::with_generator(Arc::new(client)))
    }
}
