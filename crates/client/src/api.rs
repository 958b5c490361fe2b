//! Catalog REST API client.
//!
//! Translates the five catalog operations into HTTP calls against the
//! configured base endpoint:
//!
//! | Method | Path            | Success response      |
//! |--------|-----------------|-----------------------|
//! | GET    | /products       | JSON array of Product |
//! | GET    | /products/{id}  | JSON Product          |
//! | POST   | /products       | JSON created Product  |
//! | PUT    | /products/{id}  | JSON updated Product  |
//! | DELETE | /products/{id}  | empty body            |
//!
//! Successful JSON bodies are returned as parsed, with no further schema
//! validation. Every failure becomes an [`ApiError`] with a human-readable
//! message.

use std::sync::Arc;

use catalogo_core::{NewProduct, Product, ProductId, ProductPatch};
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorBody};

/// Catalog API client.
///
/// Cheap to clone; all clones share one underlying HTTP connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client for the configured base endpoint.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// The base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// List all products, in the order the server returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("/products")?;
        let response = self.inner.client.get(url).send().await.map_err(transport)?;
        self.handle_response(response).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no such product exists.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("/products/{id}"))?;
        let response = self.inner.client.get(url).send().await.map_err(transport)?;
        self.handle_response(response).await
    }

    /// Create a product. The server assigns and returns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.endpoint("/products")?;
        let response = self
            .inner
            .client
            .post(url)
            .json(product)
            .send()
            .await
            .map_err(transport)?;
        self.handle_response(response).await
    }

    /// Update any subset of a product's mutable fields, returning the full
    /// updated product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("/products/{id}"))?;
        let response = self
            .inner
            .client
            .put(url)
            .json(patch)
            .send()
            .await
            .map_err(transport)?;
        self.handle_response(response).await
    }

    /// Delete a product. Success carries no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/products/{id}"))?;
        let response = self
            .inner
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport)?;
        self.handle_empty_response(response).await
    }

    /// Resolve a path against the base endpoint.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::new(format!("invalid endpoint {path}: {e}")))
    }

    /// Handle an API response expected to carry a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            debug!(status = status.as_u16(), "catalog request succeeded");
            return response
                .json()
                .await
                .map_err(|e| ApiError::new(format!("failed to parse response: {e}")));
        }

        Err(self.parse_error(response).await)
    }

    /// Handle an API response expected to carry no body (delete).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            debug!(status = status.as_u16(), "catalog request succeeded");
            return Ok(());
        }

        Err(self.parse_error(response).await)
    }

    /// Normalize a non-success response into an [`ApiError`].
    ///
    /// Best-effort parse of the server's `{ message }` error body; anything
    /// else falls back to a generic message carrying the HTTP status.
    async fn parse_error(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => format!("unknown error (status {status})"),
        };

        error!(status, %message, "catalog request failed");
        ApiError::new(message)
    }
}

/// Collapse a transport-level failure into the single error kind.
fn transport(e: reqwest::Error) -> ApiError {
    ApiError::new(format!("request failed: {e}"))
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}
