//! Core types for Catálogo.
//!
//! This module provides the product entity, its payload types, and the
//! filter configuration used to derive the display list.

pub mod category;
pub mod filters;
pub mod id;
pub mod product;

pub use category::CATEGORIES;
pub use filters::{FilterUpdate, ProductFilters, SortKey, SortOrder};
pub use id::*;
pub use product::{NewProduct, Product, ProductPatch, ValidationError};
