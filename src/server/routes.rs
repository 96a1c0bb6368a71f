use crate::{
    error::MockupError,
    models::{GenerateRequest, GenerateResponse},
    prompt,
    server::AppState,
};
use actix_web::{get, post, web, HttpResponse};

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Generate crochet mockups for a project description.
///
/// Field presence and color-count membership are enforced by deserialization;
/// this handler only rejects blank strings before going upstream.
#[post("/generate")]
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, MockupError> {
    let request = body.into_inner();
    validate(&request)?;

    let prompt = prompt::build_prompt(&request);
    log::debug!("Built prompt: {}", prompt);

    let images = state.generator.generate(&prompt).await.map_err(|e| {
        log::error!("Error generating images: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(GenerateResponse { images }))
}

fn validate(request: &GenerateRequest) -> Result<(), MockupError> {
    if request.project_description.trim().is_empty() || request.color_vibe.trim().is_empty() {
        return Err(MockupError::ValidationError(
            "Missing required fields: projectDescription, colorVibe, colorCount".to_string(),
        ));
    }
    Ok(())
}
