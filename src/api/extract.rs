//! Custom Axum extractors.

use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};

use crate::api::dto::shorten::OriginalUrlRequest;
use crate::error::AppError;

/// Body carrying `originalUrl`, as JSON or as an urlencoded form.
///
/// A blank body, or a body of any other content type, yields a request with
/// no URL so that validation reports it as missing.
///
/// ```ignore
/// async fn handler(UrlPayload(payload): UrlPayload) -> Result<(), AppError> {
///     payload.validate()?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct UrlPayload(pub OriginalUrlRequest);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let essence = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match essence.as_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

impl<S> FromRequest<S> for UrlPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(payload) = Form::<OriginalUrlRequest>::from_request(req, state).await?;
                Ok(Self(payload))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                    tracing::debug!("Unreadable request body: {}", rejection.body_text());
                    AppError::bad_request("Invalid request body")
                })?;

                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(OriginalUrlRequest::default()));
                }

                let Json(payload) = Json::<OriginalUrlRequest>::from_bytes(&bytes)?;
                Ok(Self(payload))
            }
            BodyKind::Other => Ok(Self(OriginalUrlRequest::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = http::Request::builder().method("POST").uri("/shorten");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<UrlPayload, AppError> {
        UrlPayload::from_request(request(content_type, body), &()).await
    }

    #[test]
    fn test_body_kind() {
        assert_eq!(body_kind(&request(Some("application/json"), "")), BodyKind::Json);
        assert_eq!(
            body_kind(&request(Some("Application/JSON; charset=utf-8"), "")),
            BodyKind::Json
        );
        assert_eq!(
            body_kind(&request(Some("application/x-www-form-urlencoded"), "")),
            BodyKind::Form
        );
        assert_eq!(body_kind(&request(Some("text/plain"), "")), BodyKind::Other);
        assert_eq!(body_kind(&request(None, "")), BodyKind::Other);
    }

    #[tokio::test]
    async fn test_json_body() {
        let UrlPayload(payload) = extract(
            Some("application/json"),
            r#"{"originalUrl":"https://example.com"}"#,
        )
        .await
        .unwrap();

        assert_eq!(payload.original_url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_form_body() {
        let UrlPayload(payload) = extract(
            Some("application/x-www-form-urlencoded"),
            "originalUrl=https%3A%2F%2Fexample.com%2F%3Fa%3D1",
        )
        .await
        .unwrap();

        assert_eq!(
            payload.original_url.as_deref(),
            Some("https://example.com/?a=1")
        );
    }

    #[tokio::test]
    async fn test_blank_bodies_carry_no_url() {
        for (content_type, body) in [
            (Some("application/json"), ""),
            (Some("application/json"), "  \n"),
            (Some("application/x-www-form-urlencoded"), ""),
            (None, ""),
            (Some("text/plain"), "https://example.com"),
        ] {
            let UrlPayload(payload) = extract(content_type, body).await.unwrap();
            assert!(payload.original_url.is_none(), "{content_type:?} {body:?}");
        }
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.public_message(), "Invalid request body");
    }
}
