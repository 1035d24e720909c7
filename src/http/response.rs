//! Response framing and error mapping.
//!
//! # Responsibilities
//! - Turn a `Mono` into a single JSON object or a plain-text body
//! - Turn a `Flux` into a buffered JSON array, NDJSON lines or SSE events
//! - Map service errors to HTTP status codes with a JSON error body
//!
//! # Design Decisions
//! - Streaming framings write each item as soon as it is pulled, so item
//!   content and order match the buffered array exactly
//! - A client disconnect drops the body stream, which drops the `Flux`

use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    http::{header, StatusCode},
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures_util::StreamExt;
use serde::Serialize;
use thiserror::Error;

use crate::observability::metrics;
use crate::reactive::{Flux, Mono};
use crate::service::UserError;

/// Content type of newline-delimited JSON bodies.
pub const APPLICATION_NDJSON: &str = "application/x-ndjson";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserError),

    /// A single-value producer completed without a value.
    #[error("No value produced")]
    Empty,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::User(UserError::InvalidArgument(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Empty => StatusCode::NOT_FOUND,
        }
    }
}

impl From<Infallible> for ApiError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request produced no value");
        }

        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown"),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Resolve `mono` into a JSON object.
pub async fn single_json<T, E>(mono: Mono<T, E>) -> Result<Json<T>, ApiError>
where
    T: Serialize,
    E: Into<ApiError>,
{
    match mono.await {
        Ok(Some(value)) => Ok(Json(value)),
        Ok(None) => Err(ApiError::Empty),
        Err(e) => Err(e.into()),
    }
}

/// Resolve `mono` into a plain-text body.
pub async fn single_text<E>(mono: Mono<String, E>) -> Result<String, ApiError>
where
    E: Into<ApiError>,
{
    match mono.await {
        Ok(Some(text)) => Ok(text),
        Ok(None) => Err(ApiError::Empty),
        Err(e) => Err(e.into()),
    }
}

/// Buffer `flux` into a JSON array.
pub async fn json_array<T>(flux: Flux<T>) -> Json<Vec<T>>
where
    T: Serialize + Send + 'static,
{
    Json(flux.collect().await)
}

/// Stream `flux` as newline-delimited JSON, one object per line.
pub fn ndjson<T>(route: &'static str, flux: Flux<T>) -> Response
where
    T: Serialize + Send + 'static,
{
    let lines = flux.map(move |item| -> Result<Bytes, serde_json::Error> {
        let mut line = serde_json::to_vec(&item)?;
        line.push(b'\n');
        metrics::record_stream_item(route);
        Ok(Bytes::from(line))
    });

    (
        [(header::CONTENT_TYPE, APPLICATION_NDJSON)],
        Body::from_stream(lines),
    )
        .into_response()
}

/// Stream `flux` as server-sent events, one `data:` event per item.
pub fn event_stream(
    route: &'static str,
    flux: Flux<String>,
) -> Sse<Flux<Result<Event, Infallible>>> {
    Sse::new(flux.map(move |data| {
        metrics::record_stream_item(route);
        Ok(Event::default().data(data))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::from(UserError::InvalidArgument("bad".into()));
        assert_eq!(invalid.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(invalid.to_string(), "bad");
        assert_eq!(ApiError::Empty.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_single_json_variants() {
        let Json(value) = single_json(Mono::<u8, Infallible>::just(3)).await.unwrap();
        assert_eq!(value, 3);

        let empty = single_json(Mono::<u8, Infallible>::empty()).await.unwrap_err();
        assert!(matches!(empty, ApiError::Empty));

        let failed = single_json(Mono::<u8, UserError>::error(UserError::InvalidArgument(
            "nope".into(),
        )))
        .await
        .unwrap_err();
        assert!(matches!(failed, ApiError::User(_)));
    }

    #[tokio::test]
    async fn test_ndjson_body() {
        let response = ndjson("test", Flux::from_iter(vec![1, 2, 3]));
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_NDJSON
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"1\n2\n3\n");
    }
}
