use crate::error::Result;
use async_trait::async_trait;

/// Backend capable of turning a prompt into a batch of rendered mockups.
///
/// Implementations return fully self-contained data URIs
/// (`data:image/png;base64,<payload>`) ready for the frontend to display.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>>;
}
