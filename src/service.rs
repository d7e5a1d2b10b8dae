// src/service.rs
// Request processing: validate, build the prompt, call the generator

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Field, ResearchError, Result};
use crate::llm::TextGenerator;
use crate::prompt::build_prompt;

/// One text-processing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchRequest {
    pub operation: String,
    pub content: String,
}

impl ResearchRequest {
    pub fn new(operation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            content: content.into(),
        }
    }

    /// Trim both fields, failing on the first one left blank (operation first)
    pub fn validated(&self) -> Result<ResearchRequest> {
        let operation = self.operation.trim();
        if operation.is_empty() {
            return Err(ResearchError::MissingField(Field::Operation));
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ResearchError::MissingField(Field::Content));
        }
        Ok(ResearchRequest::new(operation, content))
    }
}

/// Orchestrates prompt building and text generation
pub struct ResearchService {
    generator: Arc<dyn TextGenerator>,
}

impl ResearchService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run the pipeline, keeping failures typed
    pub async fn process(&self, request: &ResearchRequest) -> Result<String> {
        let request = request.validated()?;
        info!(operation = %request.operation, "Processing request");

        let prompt = build_prompt(&request.operation, &request.content)?;
        debug!(operation = %request.operation, prompt_len = prompt.len(), "Built prompt");

        self.generator.generate(&prompt).await
    }

    /// Run the pipeline and always produce a result string.
    ///
    /// Failures come back as descriptive text (`Error: ...`,
    /// `Error calling Gemini API: ...`, `Error Parsing: ...`) in place of
    /// the generated text.
    pub async fn process_content(&self, request: &ResearchRequest) -> String {
        match self.process(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    operation = %request.operation.trim(),
                    provider = self.generator.name(),
                    error = %e,
                    "Request processing failed"
                );
                e.to_user_string()
            }
        }
    }
}
