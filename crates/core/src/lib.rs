//! Catálogo Core - Shared domain types.
//!
//! This crate provides the types shared by the other Catálogo components:
//! - `client` - API gateway client and in-memory product store
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product entities, type-safe IDs, categories, and the
//!   filter/sort engine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
