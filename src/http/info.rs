//! Static descriptive routes and the liveness probe.

use std::collections::BTreeMap;

use axum::{extract::State, http::header, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::server::AppState;

/// Info, explanation and health routes, mounted at the root.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/info", get(get_info))
        .route("/api/explanation", get(get_explanation))
        .route("/health", get(health))
}

/// Application metadata and the route catalogue.
pub async fn get_info() -> Json<Value> {
    Json(json!({
        "application": "MonoFluxDemo",
        "description": "Demo to learn single-value (Mono) vs multi-value (Flux) producers",
        "version": env!("CARGO_PKG_VERSION"),
        "monoEndpoints": {
            "/api/mono/user/{id}": "Get a single user (Mono - single value)",
            "/api/mono/user-immediate/{id}": "Get user immediately (Mono - no delay)",
            "/api/mono/user-validated/{id}": "Get user with validation (Mono - error signal)",
            "/api/mono/user-email/{id}": "Get user email (Mono - transformation)",
            "/api/mono/user-summary/{id}": "Get user summary (Mono - chaining)",
        },
        "fluxEndpoints": {
            "/api/flux/products": "Get all products (Flux - multiple values)",
            "/api/flux/products-stream": "Stream products (Flux - NDJSON)",
            "/api/flux/products-by-price": "Filter by price (Flux - with parameter)",
            "/api/flux/products-by-price-stream": "Stream filtered products (Flux - NDJSON)",
            "/api/flux/low-stock": "Low stock products (Flux - business logic)",
            "/api/flux/product-names": "Get product names (Flux - transformation)",
            "/api/flux/product-names-stream": "Stream product names (Flux - event stream)",
            "/api/flux/products-combined": "Combined sources (Flux - concat + distinct)",
        },
    }))
}

/// The explanatory texts contrasting the two cardinalities.
pub async fn get_explanation() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(BTreeMap::from([
        (
            "MONO",
            "Mono is a Reactive Streams Publisher that emits 0 or 1 element.\n\
             - Use case: Single value/response\n\
             - Examples: Get one user by ID, fetch single configuration, API call returning one result\n\
             - Performance: Best for operations with one result\n\
             - Memory: Minimal - handles only one value\n\
             - Thread model: Non-blocking, single element subscription",
        ),
        (
            "FLUX",
            "Flux is a Reactive Streams Publisher that emits 0 to N elements.\n\
             - Use case: Multiple values/streaming data\n\
             - Examples: Get all users, stream live data, paginated results\n\
             - Performance: Optimized for streaming large datasets\n\
             - Memory: Efficient - processes one item at a time (backpressure)\n\
             - Thread model: Non-blocking, multiple element subscription with back-pressure support",
        ),
        (
            "KEY_DIFFERENCES",
            "1. Cardinality: Mono=0-1, Flux=0-N\n\
             2. Response: Mono=single JSON object, Flux=JSON array or stream\n\
             3. Memory: Mono=small, Flux=can handle large datasets\n\
             4. Use: Mono=single resource, Flux=collections/streams\n\
             5. Backpressure: Both support it, but Flux is more critical",
        ),
        (
            "WHEN_TO_USE_MONO",
            "- Finding a user by ID\n\
             - Getting current configuration\n\
             - Creating a single resource\n\
             - Fetching count of items\n\
             - API calls returning single object",
        ),
        (
            "WHEN_TO_USE_FLUX",
            "- Fetching all users from database\n\
             - Streaming data in real-time\n\
             - Processing large datasets\n\
             - Server-Sent Events (SSE)\n\
             - Paginated/filtered results",
        ),
    ]))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started_at.elapsed().as_secs(),
    };

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}

#[cfg(test)]
mod tests {
    use crate::http::server::tests::{get, test_router};
    use axum::http::StatusCode;

    async fn json(uri: &str) -> serde_json::Value {
        let response = get(test_router(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_info_lists_every_route() {
        let info = json("/api/info").await;
        assert_eq!(info["application"], "MonoFluxDemo");
        assert_eq!(info["monoEndpoints"].as_object().unwrap().len(), 5);
        assert_eq!(info["fluxEndpoints"].as_object().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_explanation_sections() {
        let explanation = json("/api/explanation").await;
        let mut keys: Vec<&String> = explanation.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["FLUX", "KEY_DIFFERENCES", "MONO", "WHEN_TO_USE_FLUX", "WHEN_TO_USE_MONO"]
        );
        assert!(explanation["MONO"].as_str().unwrap().contains("0 or 1 element"));
    }

    #[tokio::test]
    async fn test_health() {
        let health = json("/health").await;
        assert_eq!(health["status"], "up");
    }
}
