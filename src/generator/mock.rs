use crate::{error::Result, generator::traits::ImageGenerator};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Single-pixel PNG used as the placeholder payload.
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

const PLACEHOLDER_COUNT: usize = 3;

/// Test and local-development backend. Returns placeholder mockups without
/// touching the network.
pub struct MockImageGenerator;

impl MockImageGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>> {
        log::info!("Mock generator received prompt: {}", prompt);

        let payload = STANDARD.encode(PLACEHOLDER_PNG);
        let images = (0..PLACEHOLDER_COUNT)
            .map(|_| format!("data:image/png;base64,{}", payload))
            .collect();

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_three_data_uris() {
        let generator = MockImageGenerator::new();
        let images = generator.generate("a tiny crochet whale").await.unwrap();

        assert_eq!(images.len(), 3);
        for image in &images {
            assert!(image.starts_with("data:image/png;base64,"));
        }
    }

    #[test]
    fn test_placeholder_is_a_png() {
        assert_eq!(&PLACEHOLDER_PNG[1..4], b"PNG");
    }
}
