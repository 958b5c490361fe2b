//! Product catalog commands.
//!
//! Each command builds a [`ProductStore`] from the environment-configured
//! client, runs the corresponding store action, and prints the result.
//! Failures surface as process errors with the store's recorded message.

use catalogo_client::{CatalogClient, ClientConfig, ProductStore};
use catalogo_core::{
    CATEGORIES, FilterUpdate, NewProduct, Product, ProductId, ProductPatch, SortKey, SortOrder,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while running a catalog command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] catalogo_client::ConfigError),

    /// The payload failed local validation before any network call.
    #[error("invalid product: {0}")]
    Validation(#[from] catalogo_core::ValidationError),

    /// The store recorded or returned a failure.
    #[error("{0}")]
    Failed(String),
}

/// Build a store against the environment-configured endpoint.
fn store() -> Result<ProductStore, CommandError> {
    let config = ClientConfig::from_env()?;
    Ok(ProductStore::new(CatalogClient::new(&config)))
}

/// List products, applying the given filters to the derived view.
pub async fn list(
    search: Option<String>,
    categoria: Option<String>,
    preco_min: Option<Decimal>,
    preco_max: Option<Decimal>,
    sort_by: SortKey,
    desc: bool,
) -> Result<(), CommandError> {
    let store = store()?;
    store.fetch_all().await;

    if let Some(message) = store.error() {
        return Err(CommandError::Failed(message));
    }

    store.set_filters(FilterUpdate {
        search_term: search,
        category: categoria,
        price_min: preco_min,
        price_max: preco_max,
        sort_by: Some(sort_by),
        sort_order: Some(if desc { SortOrder::Desc } else { SortOrder::Asc }),
    });

    let view = store.filtered_products();
    let total = store.products().len();

    print_table(&view);
    if store.filters().is_active() {
        println!("{} of {total} products", view.len());
    } else {
        println!("{total} products");
    }

    Ok(())
}

/// Show a single product by id.
pub async fn get(id: i32) -> Result<(), CommandError> {
    let config = ClientConfig::from_env()?;
    let client = CatalogClient::new(&config);

    let product = client
        .get_product(ProductId::new(id))
        .await
        .map_err(|e| CommandError::Failed(e.message().to_string()))?;

    print_product(&product);
    Ok(())
}

/// Create a product after validating the payload locally.
pub async fn create(
    nome: String,
    categoria: String,
    descricao: String,
    preco: Decimal,
    estoque: u32,
) -> Result<(), CommandError> {
    let product = NewProduct {
        name: nome,
        category: categoria,
        description: descricao,
        price: preco,
        stock_quantity: estoque,
    };
    product.validate()?;

    let store = store()?;
    let created = store
        .create(product)
        .await
        .map_err(|e| CommandError::Failed(e.message().to_string()))?;

    println!("created product {}", created.id);
    print_product(&created);
    Ok(())
}

/// Update any subset of a product's fields.
pub async fn update(
    id: i32,
    nome: Option<String>,
    categoria: Option<String>,
    descricao: Option<String>,
    preco: Option<Decimal>,
    estoque: Option<u32>,
) -> Result<(), CommandError> {
    let patch = ProductPatch {
        name: nome,
        category: categoria,
        description: descricao,
        price: preco,
        stock_quantity: estoque,
    };

    let store = store()?;
    let updated = store
        .update(ProductId::new(id), patch)
        .await
        .map_err(|e| CommandError::Failed(e.message().to_string()))?;

    println!("updated product {}", updated.id);
    print_product(&updated);
    Ok(())
}

/// Delete a product by id.
pub async fn delete(id: i32) -> Result<(), CommandError> {
    let store = store()?;
    store
        .delete(ProductId::new(id))
        .await
        .map_err(|e| CommandError::Failed(e.message().to_string()))?;

    println!("deleted product {id}");
    Ok(())
}

/// Print the fixed category set, one per line.
pub fn categories() {
    for category in CATEGORIES {
        println!("{category}");
    }
}

fn print_table(products: &[Product]) {
    println!(
        "{:>5}  {:<30}  {:<15}  {:>10}  {:>7}",
        "id", "nome", "categoria", "preco", "estoque"
    );
    for product in products {
        println!(
            "{:>5}  {:<30}  {:<15}  {:>10}  {:>7}",
            product.id, product.name, product.category, product.price, product.stock_quantity
        );
    }
}

fn print_product(product: &Product) {
    println!("id:        {}", product.id);
    println!("nome:      {}", product.name);
    println!("categoria: {}", product.category);
    println!("descricao: {}", product.description);
    println!("preco:     {}", product.price);
    println!("estoque:   {}", product.stock_quantity);
}
