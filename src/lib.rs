//! Crochet mockup generation service.
//!
//! Takes a project description plus color preferences, builds an
//! image-generation prompt, forwards it to an AI image provider, and returns
//! the rendered mockups as base64 data URIs over a small HTTP API.

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod server;

pub use config::{Config, OpenAiConfig};
pub use error::{MockupError, Result};
pub use generator::{ImageGenerator, MockImageGenerator, OpenAiImageGenerator};
pub use models::{ColorCount, GenerateRequest, GenerateResponse};
pub use prompt::build_prompt;
