//! Integration test harness for Catálogo.
//!
//! Provides an in-process mock catalog server speaking the same wire
//! protocol as the real one: the five `/products` routes, Portuguese JSON
//! field names, server-assigned identifiers, and `{ message, statusCode,
//! error }` error bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! let server = TestCatalog::spawn().await;
//! let store = server.store();
//! store.fetch_all().await;
//! assert!(store.products().is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use catalogo_client::{CatalogClient, ClientConfig, ProductStore};
use catalogo_core::{NewProduct, Product, ProductId, ProductPatch};
use serde_json::json;

/// Shared state of the mock catalog.
#[derive(Debug, Default)]
struct CatalogState {
    products: Vec<Product>,
    next_id: i32,
    /// When set, every route answers with a plain-text 500.
    failing: bool,
}

type SharedState = Arc<Mutex<CatalogState>>;

/// An in-process catalog server bound to an ephemeral port.
pub struct TestCatalog {
    base_url: String,
    state: SharedState,
}

impl TestCatalog {
    /// Spawn an empty mock catalog.
    ///
    /// # Panics
    ///
    /// Panics if no ephemeral port can be bound.
    pub async fn spawn() -> Self {
        Self::spawn_with(Vec::new()).await
    }

    /// Spawn a mock catalog seeded with the given products.
    ///
    /// # Panics
    ///
    /// Panics if no ephemeral port can be bound.
    pub async fn spawn_with(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;
        let state: SharedState = Arc::new(Mutex::new(CatalogState {
            products,
            next_id,
            failing: false,
        }));

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(Arc::clone(&state));

        let base_url = serve(app).await;
        Self { base_url, state }
    }

    /// Spawn a server that answers every request with a plain-text 500,
    /// exercising the client's generic error fallback.
    ///
    /// # Panics
    ///
    /// Panics if no ephemeral port can be bound.
    pub async fn spawn_broken() -> Self {
        let server = Self::spawn().await;
        server.set_failing(true);
        server
    }

    /// Toggle failure mode: while set, every route answers with a
    /// plain-text 500 instead of touching the catalog.
    ///
    /// # Panics
    ///
    /// Panics if the state mutex is poisoned.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Base URL of the running server.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A catalog client pointed at this server.
    ///
    /// # Panics
    ///
    /// Panics if the bound address does not form a valid URL.
    #[must_use]
    pub fn client(&self) -> CatalogClient {
        let config = ClientConfig::with_base_url(&self.base_url).expect("valid test server URL");
        CatalogClient::new(&config)
    }

    /// A fresh product store backed by this server.
    #[must_use]
    pub fn store(&self) -> ProductStore {
        ProductStore::new(self.client())
    }

    /// Snapshot of the server-side collection, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the state mutex is poisoned.
    #[must_use]
    pub fn server_products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Bind an ephemeral port, serve the router in the background, and return
/// the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

fn not_found(id: i32) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Not found",
            "statusCode": 404,
            "error": format!("product {id} does not exist"),
        })),
    )
        .into_response()
}

/// The failure-mode answer: a non-JSON body the client cannot parse.
fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "database exploded").into_response()
}

async fn list_products(State(state): State<SharedState>) -> Response {
    let state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.failing {
        return failure();
    }
    Json(state.products.clone()).into_response()
}

async fn get_product(State(state): State<SharedState>, Path(id): Path<i32>) -> Response {
    let state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.failing {
        return failure();
    }
    state
        .products
        .iter()
        .find(|p| p.id == ProductId::new(id))
        .map_or_else(|| not_found(id), |p| Json(p.clone()).into_response())
}

async fn create_product(
    State(state): State<SharedState>,
    Json(payload): Json<NewProduct>,
) -> Response {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.failing {
        return failure();
    }
    let id = state.next_id;
    state.next_id += 1;

    let product = Product {
        id: ProductId::new(id),
        name: payload.name,
        category: payload.category,
        description: payload.description,
        price: payload.price,
        stock_quantity: payload.stock_quantity,
    };
    state.products.push(product.clone());

    (StatusCode::CREATED, Json(product)).into_response()
}

async fn update_product(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProductPatch>,
) -> Response {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.failing {
        return failure();
    }
    let Some(product) = state
        .products
        .iter_mut()
        .find(|p| p.id == ProductId::new(id))
    else {
        return not_found(id);
    };

    if let Some(name) = patch.name {
        product.name = name;
    }
    if let Some(category) = patch.category {
        product.category = category;
    }
    if let Some(description) = patch.description {
        product.description = description;
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    if let Some(stock_quantity) = patch.stock_quantity {
        product.stock_quantity = stock_quantity;
    }

    Json(product.clone()).into_response()
}

async fn delete_product(State(state): State<SharedState>, Path(id): Path<i32>) -> Response {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.failing {
        return failure();
    }
    let Some(position) = state
        .products
        .iter()
        .position(|p| p.id == ProductId::new(id))
    else {
        return not_found(id);
    };

    state.products.remove(position);
    StatusCode::NO_CONTENT.into_response()
}

/// Parse a decimal literal for test assertions.
///
/// Prices cross the wire as JSON numbers, which drop trailing zeros; compare
/// decimal values, not their string forms.
///
/// # Panics
///
/// Panics if `value` is not a decimal literal.
#[must_use]
pub fn dec(value: &str) -> rust_decimal::Decimal {
    value.parse().expect("decimal literal")
}

/// Build a product value for seeding tests.
#[must_use]
pub fn product(id: i32, name: &str, category: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("descrição de {name}"),
        price: price.parse().expect("decimal literal"),
        stock_quantity: 1,
    }
}

/// Build a create payload for tests.
#[must_use]
pub fn new_product(name: &str, category: &str, price: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        description: format!("descrição de {name}"),
        price: price.parse().expect("decimal literal"),
        stock_quantity: 1,
    }
}
