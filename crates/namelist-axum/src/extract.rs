//! Request body extractor accepting JSON or URL-encoded form data.

use axum::Form;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Deserializes the body as `application/x-www-form-urlencoded` when the
/// request says so, and as JSON otherwise.
///
/// Rejections are converted to [`HttpError`] so malformed bodies get the
/// same error shape as every other failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) if rejection.status() == StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                Err(HttpError::UnsupportedMediaType(rejection.body_text()))
            }
            Err(rejection) => Err(HttpError::BadRequest(rejection.body_text())),
        }
    }
}
