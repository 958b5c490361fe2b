//! Product entity and its request payload types.
//!
//! Wire field names follow the catalog server's JSON shape (`nome`,
//! `categoria`, `descricao`, `preco`, `quantidade_estoque`); the Rust fields
//! use English names via serde renames. Prices are JSON numbers on the wire,
//! represented as [`Decimal`] to keep arithmetic exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog entry as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, immutable once assigned.
    pub id: ProductId,
    /// Product name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Category, drawn from [`super::CATEGORIES`] by the UI but free text on
    /// the wire.
    #[serde(rename = "categoria")]
    pub category: String,
    /// Plain text description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Unit price, non-negative.
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "quantidade_estoque")]
    pub stock_quantity: u32,
}

/// Payload for creating a product. The server assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "quantidade_estoque")]
    pub stock_quantity: u32,
}

/// Partial update payload. Only set fields are sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "preco",
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub price: Option<Decimal>,
    #[serde(rename = "quantidade_estoque", skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<u32>,
}

/// Errors from [`NewProduct::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("category is required")]
    CategoryRequired,
    #[error("description is required")]
    DescriptionRequired,
    #[error("description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("price must be greater than zero")]
    PriceNotPositive,
}

impl NewProduct {
    /// Validate the payload before submitting it to the server.
    ///
    /// Mirrors the rules the catalog form enforces: trimmed non-empty name of
    /// at least 2 characters, a category, a trimmed description of at least
    /// 10 characters, and a strictly positive price. Stock quantity is
    /// non-negative by construction.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload violates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if name.chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }

        if self.category.is_empty() {
            return Err(ValidationError::CategoryRequired);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if description.chars().count() < 10 {
            return Err(ValidationError::DescriptionTooShort);
        }

        if self.price <= Decimal::ZERO {
            return Err(ValidationError::PriceNotPositive);
        }

        Ok(())
    }
}
