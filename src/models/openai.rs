use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageResponse {
    pub data: Option<Vec<OpenAiImageData>>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImageData {
    pub b64_json: Option<String>,
}
