//! In-memory product store.
//!
//! The store owns the authoritative client-side copy of the product
//! collection plus loading state, error state, and the active filter
//! configuration. The front end only reads state and invokes the actions
//! here; it never mutates state directly.
//!
//! Every network action follows the same shape: set loading and clear any
//! prior error, call the API client, then on success apply the result and
//! clear loading, on failure record the error message and clear loading.
//! Mutating actions are serialized through a single-writer gate, so two
//! rapid actions cannot interleave and a stale response can never overwrite
//! newer state. Reads never block on an in-flight action.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalogo_core::{FilterUpdate, NewProduct, Product, ProductFilters, ProductId, ProductPatch};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::api::CatalogClient;
use crate::error::ApiError;

/// State owned exclusively by the store.
#[derive(Debug, Default)]
struct StoreState {
    /// Product collection in server/insertion order, never sorted in place.
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    filters: ProductFilters,
}

/// The single in-memory holder of catalog state.
///
/// An explicit, injectable state container: construct one with the client
/// it should use and pass it wherever it is needed.
#[derive(Debug)]
pub struct ProductStore {
    client: CatalogClient,
    /// Serializes mutating actions; held across the network call.
    action_gate: Mutex<()>,
    state: RwLock<StoreState>,
}

impl ProductStore {
    /// Create an empty store backed by the given client, with default
    /// filters.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            action_gate: Mutex::new(()),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Replace the entire collection with the server's product list.
    ///
    /// Unlike the other actions, failures are not returned to the caller;
    /// they are only recorded in store state for the front end to observe.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) {
        let _gate = self.action_gate.lock().await;
        self.begin();

        match self.client.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "loaded product collection");
                let mut state = self.write();
                state.products = products;
                state.loading = false;
            }
            Err(e) => self.fail(&e, "failed to load products"),
        }
    }

    /// Create a product and append the server-returned entry to the
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording it in store state.
    #[instrument(skip(self, product))]
    pub async fn create(&self, product: NewProduct) -> Result<Product, ApiError> {
        let _gate = self.action_gate.lock().await;
        self.begin();

        match self.client.create_product(&product).await {
            Ok(created) => {
                let mut state = self.write();
                state.products.push(created.clone());
                state.loading = false;
                Ok(created)
            }
            Err(e) => {
                self.fail(&e, "failed to create product");
                Err(e)
            }
        }
    }

    /// Update a product and replace the matching entry in place, preserving
    /// collection order. An id the collection does not hold leaves it
    /// unchanged; no entry is added.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording it in store state.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, ApiError> {
        let _gate = self.action_gate.lock().await;
        self.begin();

        match self.client.update_product(id, &patch).await {
            Ok(updated) => {
                let mut state = self.write();
                if let Some(slot) = state.products.iter_mut().find(|p| p.id == id) {
                    *slot = updated.clone();
                }
                state.loading = false;
                Ok(updated)
            }
            Err(e) => {
                self.fail(&e, "failed to update product");
                Err(e)
            }
        }
    }

    /// Delete a product, removing at most the one matching entry and leaving
    /// the relative order of the rest unchanged.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording it in store state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        let _gate = self.action_gate.lock().await;
        self.begin();

        match self.client.delete_product(id).await {
            Ok(()) => {
                let mut state = self.write();
                if let Some(position) = state.products.iter().position(|p| p.id == id) {
                    state.products.remove(position);
                }
                state.loading = false;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, "failed to delete product");
                Err(e)
            }
        }
    }

    /// Shallow-merge a filter change into the active configuration. No
    /// network call; cannot fail.
    pub fn set_filters(&self, update: FilterUpdate) {
        self.write().filters.merge(update);
    }

    /// Reset the filter configuration to its defaults.
    pub fn clear_filters(&self) {
        self.write().filters = ProductFilters::default();
    }

    /// Reset the error state to none. Has no other effect.
    pub fn clear_error(&self) {
        self.write().error = None;
    }

    /// Derive the display list from the current collection and filters.
    ///
    /// Recomputed on every call; nothing is memoized.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<Product> {
        let state = self.read();
        state.filters.apply(&state.products)
    }

    /// Snapshot of the raw collection, in server/insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    /// Whether an action is currently waiting on the network.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// The recorded error message, if the last action failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Snapshot of the active filter configuration.
    #[must_use]
    pub fn filters(&self) -> ProductFilters {
        self.read().filters.clone()
    }

    /// Mark an action as started: loading on, prior error cleared.
    fn begin(&self) {
        let mut state = self.write();
        state.loading = true;
        state.error = None;
    }

    /// Record a failed action: error message set, loading off. The
    /// collection is left untouched.
    fn fail(&self, error: &ApiError, fallback: &str) {
        let message = if error.message().is_empty() {
            fallback.to_string()
        } else {
            error.message().to_string()
        };

        let mut state = self.write();
        state.error = Some(message);
        state.loading = false;
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
