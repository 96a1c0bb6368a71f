use crate::error::MockupError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;

/// Bearer-token gate in front of the generation endpoint.
///
/// Token verification proper belongs to the identity provider; this layer
/// only checks the shared secret handed out to the frontend. With no token
/// configured the gate is disabled and every request passes through.
pub struct BearerAuth {
    token: Option<String>,
}

impl BearerAuth {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BearerAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            token: self.token.clone(),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    token: Option<String>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let expected = self.token.clone();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(expected) = expected {
                let verdict = match bearer_token(&req) {
                    Ok(token) if token == expected => Ok(()),
                    Ok(_) => Err("Invalid or expired token"),
                    Err(message) => Err(message),
                };

                if let Err(message) = verdict {
                    log::warn!("Rejected request to {}: {}", req.path(), message);
                    return Ok(unauthorized(req, message));
                }

                log::debug!("Authenticated request to {}", req.path());
            }

            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Result<&str, &'static str> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("Authorization header required")?;

    let value = header_value
        .to_str()
        .map_err(|_| "Invalid authorization header format")?;

    value
        .strip_prefix("Bearer ")
        .ok_or("Invalid authorization header format")
}

fn unauthorized<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = MockupError::AuthError(message.to_string())
        .error_response()
        .map_into_right_body();
    req.into_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, App, HttpResponse};

    #[get("/protected")]
    async fn protected() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
    }

    async fn call(token_config: Option<&str>, auth_header: Option<&str>) -> u16 {
        let app = test::init_service(
            App::new().service(
                actix_web::web::scope("")
                    .wrap(BearerAuth::new(token_config.map(String::from)))
                    .service(protected),
            ),
        )
        .await;

        let mut request = test::TestRequest::get().uri("/protected");
        if let Some(value) = auth_header {
            request = request.insert_header((header::AUTHORIZATION, value));
        }

        let response = test::call_service(&app, request.to_request()).await;
        response.status().as_u16()
    }

    #[actix_web::test]
    async fn test_disabled_gate_lets_requests_through() {
        assert_eq!(call(None, None).await, 200);
    }

    #[actix_web::test]
    async fn test_missing_header_is_401() {
        assert_eq!(call(Some("secret"), None).await, 401);
    }

    #[actix_web::test]
    async fn test_malformed_header_is_401() {
        assert_eq!(call(Some("secret"), Some("secret")).await, 401);
        assert_eq!(call(Some("secret"), Some("Basic secret")).await, 401);
    }

    #[actix_web::test]
    async fn test_wrong_token_is_401() {
        assert_eq!(call(Some("secret"), Some("Bearer nope")).await, 401);
    }

    #[actix_web::test]
    async fn test_valid_token_passes() {
        assert_eq!(call(Some("secret"), Some("Bearer secret")).await, 200);
    }
}
