use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{ndjson_line, sse_data, LineBuffer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typed client for the demo API. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct DemoClient {
    client: Client,
    base_url: String,
}

impl DemoClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest` client (proxies, timeouts, pooling).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn user(&self, id: i32) -> Result<User, ClientError> {
        self.get_json(&format!("/api/mono/user/{}", id)).await
    }

    pub async fn user_immediate(&self, id: i32) -> Result<User, ClientError> {
        self.get_json(&format!("/api/mono/user-immediate/{}", id)).await
    }

    pub async fn user_validated(&self, id: i32) -> Result<User, ClientError> {
        self.get_json(&format!("/api/mono/user-validated/{}", id)).await
    }

    pub async fn user_email(&self, id: i32) -> Result<String, ClientError> {
        self.get_text(&format!("/api/mono/user-email/{}", id)).await
    }

    pub async fn user_summary(&self, id: i32) -> Result<String, ClientError> {
        self.get_text(&format!("/api/mono/user-summary/{}", id)).await
    }

    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_json("/api/flux/products").await
    }

    /// Read the NDJSON variant, decoding each line as it arrives.
    pub async fn products_stream(&self) -> Result<Vec<Product>, ClientError> {
        self.get_ndjson("/api/flux/products-stream").await
    }

    /// `None` lets the server apply its default price ceiling.
    pub async fn products_by_price(
        &self,
        max_price: Option<f64>,
    ) -> Result<Vec<Product>, ClientError> {
        self.get_json(&with_query("/api/flux/products-by-price", "maxPrice", max_price))
            .await
    }

    pub async fn products_by_price_stream(
        &self,
        max_price: Option<f64>,
    ) -> Result<Vec<Product>, ClientError> {
        self.get_ndjson(&with_query("/api/flux/products-by-price-stream", "maxPrice", max_price))
            .await
    }

    pub async fn low_stock(&self, threshold: Option<i32>) -> Result<Vec<Product>, ClientError> {
        self.get_json(&with_query("/api/flux/low-stock", "threshold", threshold))
            .await
    }

    pub async fn product_names(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/api/flux/product-names").await
    }

    /// Read the event-stream variant, one name per `data:` line.
    pub async fn product_names_stream(&self) -> Result<Vec<String>, ClientError> {
        let mut res = self.send("/api/flux/product-names-stream").await?;
        let mut buffer = LineBuffer::new();
        let mut names = Vec::new();
        while let Some(chunk) = res.chunk().await? {
            for line in buffer.push(&chunk) {
                if let Some(data) = sse_data(&line) {
                    names.push(data.to_string());
                }
            }
        }
        Ok(names)
    }

    pub async fn products_combined(&self) -> Result<Vec<Product>, ClientError> {
        self.get_json("/api/flux/products-combined").await
    }

    pub async fn info(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/api/info").await
    }

    pub async fn explanation(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/api/explanation").await
    }

    /// Send a GET and fail on any non-success status.
    async fn send(&self, path: &str) -> Result<Response, ClientError> {
        let res = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }
        Ok(res)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let text = self.send(path).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        Ok(self.send(path).await?.text().await?)
    }

    async fn get_ndjson<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let mut res = self.send(path).await?;
        let mut buffer = LineBuffer::new();
        let mut items = Vec::new();
        while let Some(chunk) = res.chunk().await? {
            for line in buffer.push(&chunk) {
                if let Some(item) = ndjson_line(&line) {
                    items.push(item?);
                }
            }
        }
        if let Some(rest) = buffer.finish() {
            if let Some(item) = ndjson_line(&rest) {
                items.push(item?);
            }
        }
        Ok(items)
    }
}

fn with_query<V: std::fmt::Display>(path: &str, key: &str, value: Option<V>) -> String {
    match value {
        Some(value) => format!("{}?{}={}", path, key, value),
        None => path.to_string(),
    }
}
