// src/llm/provider.rs
// Text generation abstraction used by the request processor

use async_trait::async_trait;

use crate::error::Result;

/// Marker returned when the upstream answered without any text
pub const NO_CONTENT: &str = "No content found in response";

/// Something that turns a prompt into generated text.
///
/// An upstream answer that contains no text is a successful call and yields
/// [`NO_CONTENT`]; only transport, status, configuration and parse problems
/// are errors.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}
