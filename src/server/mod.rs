pub mod auth;
pub mod routes;

use crate::{
    config::Config,
    error::MockupError,
    generator::{self, ImageGenerator},
    logger,
    models::ErrorBody,
};
use actix_cors::Cors;
use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer, ResponseError};
use std::sync::Arc;

pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

impl ResponseError for MockupError {
    fn status_code(&self) -> StatusCode {
        match self {
            MockupError::ValidationError(_) => StatusCode::BAD_REQUEST,
            MockupError::AuthError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Client errors carry their message; anything upstream or internal is
        // collapsed into a generic body so provider details stay in the logs.
        let error = match self {
            MockupError::ValidationError(msg) | MockupError::AuthError(msg) => msg.clone(),
            _ => "Failed to generate images".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error })
    }
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        MockupError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let generator = generator::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let port = config.port.unwrap_or(8080);
    let auth_token = config.auth_token.clone();

    logger::log_startup_info("crochetgen", env!("CARGO_PKG_VERSION"), port);
    logger::log_config_info(&config);

    let state = web::Data::new(AppState { generator });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .wrap(cors())
            .service(routes::health)
            .service(
                web::scope("")
                    .wrap(auth::BearerAuth::new(auth_token.clone()))
                    .service(routes::generate),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
