//! Multi-value routes under `/api/flux`.
//!
//! Buffered routes answer with a JSON array; the `-stream` variants write the
//! same items, in the same order, as NDJSON lines or server-sent events.

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::{
        sse::{Event, Sse},
        Response,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::response::{event_stream, json_array, ndjson};
use crate::http::server::AppState;
use crate::model::Product;
use crate::reactive::Flux;

/// `?maxPrice=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

/// `?threshold=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct StockQuery {
    pub threshold: Option<i32>,
}

/// Multi-value routes, mounted under `/api/flux`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_all_products))
        .route("/products-stream", get(stream_all_products))
        .route("/products-by-price", get(get_products_by_price))
        .route("/products-by-price-stream", get(stream_products_by_price))
        .route("/low-stock", get(get_low_stock_products))
        .route("/product-names", get(get_product_names))
        .route("/product-names-stream", get(stream_product_names))
        .route("/products-combined", get(get_combined_products))
}

fn by_price(state: &AppState, query: PriceQuery) -> Flux<Product> {
    let max_price = query.max_price.unwrap_or(state.flux.default_max_price);
    tracing::debug!(max_price, "Filtering products by price");
    state.products.get_products_by_max_price(max_price)
}

pub async fn get_all_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    json_array(state.products.get_all_products()).await
}

pub async fn stream_all_products(State(state): State<AppState>) -> Response {
    ndjson("products-stream", state.products.get_all_products())
}

pub async fn get_products_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Json<Vec<Product>> {
    json_array(by_price(&state, query)).await
}

pub async fn stream_products_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Response {
    ndjson("products-by-price-stream", by_price(&state, query))
}

pub async fn get_low_stock_products(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Json<Vec<Product>> {
    let threshold = query
        .threshold
        .unwrap_or(state.flux.default_low_stock_threshold);
    json_array(state.products.get_low_stock_products(threshold)).await
}

pub async fn get_product_names(State(state): State<AppState>) -> Json<Vec<String>> {
    json_array(state.products.get_product_names()).await
}

pub async fn stream_product_names(
    State(state): State<AppState>,
) -> Sse<Flux<Result<Event, Infallible>>> {
    event_stream("product-names-stream", state.products.get_product_names())
}

/// Products up to 100 followed by products up to 500, duplicates removed.
pub async fn get_combined_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    json_array(state.products.get_combined_products()).await
}
