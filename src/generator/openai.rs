use crate::{
    config::OpenAiConfig,
    error::{MockupError, Result},
    generator::traits::ImageGenerator,
    logger,
    models::{OpenAiImageRequest, OpenAiImageResponse},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-image-1";

/// Every request asks for the same batch: three square mockups.
const IMAGE_COUNT: u8 = 3;
const IMAGE_SIZE: &str = "1024x1024";

pub struct OpenAiImageGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiImageGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| MockupError::ConfigError("OpenAI API key is required".into()))?;

        Ok(Self {
            client: Client::new(),
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", self.api_key).parse().unwrap(),
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );
        headers
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>> {
        let payload = OpenAiImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        };

        log::info!(
            "Generating {} images at {} with model: {}",
            IMAGE_COUNT,
            IMAGE_SIZE,
            self.model
        );
        let _timer = logger::timer("image generation");

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .headers(self.build_headers())
            .json(&payload)
            .send()
            .await
            .map_err(|e| MockupError::RequestError(format!("Provider request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Provider returned {}: {}", status, error_text);
            return Err(MockupError::ResponseError(format!(
                "Provider returned status {}",
                status
            )));
        }

        let parsed: OpenAiImageResponse = response
            .json()
            .await
            .map_err(|e| MockupError::ResponseError(e.to_string()))?;

        data_uris(parsed)
    }
}

/// Convert a provider response into displayable data URIs. The batch is all
/// or nothing: an empty response or any item without a decodable payload
/// fails the whole call.
fn data_uris(response: OpenAiImageResponse) -> Result<Vec<String>> {
    let data = response
        .data
        .filter(|items| !items.is_empty())
        .ok_or_else(|| MockupError::ResponseError("No images generated".into()))?;

    data.into_iter()
        .map(|item| {
            let payload = item.b64_json.ok_or_else(|| {
                MockupError::ResponseError("Missing base64 data in image response".into())
            })?;

            STANDARD.decode(&payload).map_err(|_| {
                MockupError::ResponseError("Invalid base64 data in image response".into())
            })?;

            Ok(format!("data:image/png;base64,{}", payload))
        })
        .collect()
}
