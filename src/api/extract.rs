//! Request body extraction for creation requests.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use tracing::debug;

use crate::api::dto::mapping::CreateMappingRequest;
use crate::error::{AppError, CreateError};

/// A creation request read from either a JSON or a form-encoded body.
///
/// The body format is picked from `Content-Type`; anything other than JSON is
/// read as a form. An unreadable body is reported as a malformed URL.
#[derive(Debug)]
pub struct UrlSubmission(pub CreateMappingRequest);

impl<S> FromRequest<S> for UrlSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let parsed = if is_json {
            Json::<CreateMappingRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| rejection.body_text())
        } else {
            Form::<CreateMappingRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| rejection.body_text())
        };

        parsed.map(UrlSubmission).map_err(|reason| {
            debug!("Unreadable creation request: {}", reason);
            AppError::Create(CreateError::Malformed)
        })
    }
}
