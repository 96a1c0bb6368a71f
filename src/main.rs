use crochetgen::{logger, server, Config};
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger_config = if env::var("APP_ENV").as_deref() == Ok("production") {
        logger::LoggerConfig::production()
    } else {
        logger::LoggerConfig::development()
    };
    logger::init_with_config(logger_config)?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();

    let generator_type = config.generator.as_deref().unwrap_or("openai");
    log::info!("Using image generator: {}", generator_type);

    if generator_type == "openai" {
        match env::var("OPENAI_API_KEY") {
            Ok(api_key) => {
                log::info!("✅ OpenAI API key found in environment");
                log::debug!(
                    "API key starts with: {}...",
                    &api_key[..5.min(api_key.len())]
                );
            }
            Err(_) => {
                log::warn!("⚠️  No OPENAI_API_KEY in environment");
                log::error!("❌ Image generation requests will fail to authenticate");
            }
        }
    }

    if config.auth_token.is_none() {
        log::warn!("⚠️  No AUTH_TOKEN configured, the /generate endpoint is open");
    }

    server::run(config).await?;

    Ok(())
}
