use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Body extractor that accepts `application/json`,
/// `application/x-www-form-urlencoded` or `multipart/form-data`, chosen by the
/// `Content-Type` header. Parse failures become `AppError::BadRequest`
/// carrying the parser's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        if is_json(&content_type) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
            return Ok(Self(from_multipart(multipart).await?));
        }

        Err(AppError::unsupported_media_type(
            "expected application/json, application/x-www-form-urlencoded or multipart/form-data body",
        ))
    }
}

/// Collects the named text parts into a flat object and deserializes that,
/// so multipart bodies follow the same field rules as form bodies.
async fn from_multipart<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, AppError> {
    let mut fields = serde_json::Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|err| AppError::bad_request(err.body_text()))?;
        fields.insert(name, serde_json::Value::String(value));
    }

    serde_json::from_value(serde_json::Value::Object(fields))
        .map_err(|err| AppError::bad_request(format!("Failed to deserialize form body: {err}")))
}

fn is_json(content_type: &str) -> bool {
    content_type.starts_with("application/json") || content_type.contains("+json")
}
