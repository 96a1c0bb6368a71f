pub mod mock;
pub mod openai;
pub mod traits;

use crate::{
    config::Config,
    error::{MockupError, Result},
};
use std::sync::Arc;

pub use mock::MockImageGenerator;
pub use openai::OpenAiImageGenerator;
pub use traits::ImageGenerator;

/// Build the configured image-generation backend. Defaults to the OpenAI
/// backend when no generator type is set.
pub fn from_config(config: &Config) -> Result<Arc<dyn ImageGenerator>> {
    match config.generator.as_deref().unwrap_or("openai") {
        "openai" => {
            let openai_config = config
                .openai
                .clone()
                .ok_or_else(|| MockupError::ConfigError("OpenAI config required".into()))?;
            Ok(Arc::new(OpenAiImageGenerator::new(openai_config)?))
        }
        "mock" => Ok(Arc::new(MockImageGenerator::new())),
        other => Err(MockupError::ConfigError(format!(
            "Unsupported image generator type: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpenAiConfig;

    #[test]
    fn test_mock_backend_selected() {
        let config = Config::new().with_generator("mock");
        assert!(from_config(&config).is_ok());
    }

    #[test]
    fn test_openai_backend_needs_config() {
        let config = Config::new().with_generator("openai");
        assert!(from_config(&config).is_err());

        let config = Config::new()
            .with_generator("openai")
            .with_openai(OpenAiConfig::new().with_api_key("sk-test"));
        assert!(from_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let config = Config::new().with_generator("dall-e-on-a-floppy");
        assert!(from_config(&config).is_err());
    }
}
