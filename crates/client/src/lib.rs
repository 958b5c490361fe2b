//! Catálogo client - API gateway client and in-memory product store.
//!
//! Two pieces compose this crate:
//!
//! - [`CatalogClient`] translates the five catalog operations into HTTP
//!   calls against the configured base endpoint and normalizes every
//!   failure into a single [`ApiError`] carrying a human-readable message.
//! - [`ProductStore`] owns the in-memory product collection, loading and
//!   error state, and the active [filter configuration]; it exposes the
//!   mutating actions the UI invokes and a derived filtered+sorted view.
//!
//! Control flow: the front end triggers store actions, the store calls the
//! API client, mutates its own state from the response, and the front end
//! reads the derived view back out.
//!
//! [filter configuration]: catalogo_core::ProductFilters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use api::CatalogClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use store::ProductStore;
