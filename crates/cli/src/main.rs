//! Catálogo CLI - terminal front end for the product catalog.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, filtered and sorted
//! catalogo list --categoria Livros --sort-by preco --desc
//!
//! # Inspect one product
//! catalogo get 3
//!
//! # Create a product
//! catalogo create --nome "Fone Bluetooth" --categoria "Áudio" \
//!     --descricao "Fone sem fio com cancelamento de ruído" \
//!     --preco 199.90 --estoque 5
//!
//! # Update a subset of fields
//! catalogo update 3 --preco 149.90
//!
//! # Delete a product
//! catalogo delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOGO_API_URL` - Base URL of the catalog server
//!   (default: `http://localhost:3001`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use catalogo_core::SortKey;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "catalogo")]
#[command(author, version, about = "Catálogo product catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    List {
        /// Case-insensitive substring matched against product names
        #[arg(short, long)]
        search: Option<String>,

        /// Show only this category
        #[arg(short, long)]
        categoria: Option<String>,

        /// Inclusive minimum price
        #[arg(long)]
        preco_min: Option<Decimal>,

        /// Inclusive maximum price
        #[arg(long)]
        preco_max: Option<Decimal>,

        /// Sort field (nome, preco, categoria)
        #[arg(long, default_value = "nome")]
        sort_by: SortKey,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
    /// Show a single product
    Get {
        /// Product identifier
        id: i32,
    },
    /// Create a new product
    Create {
        /// Product name
        #[arg(long)]
        nome: String,

        /// Category (see `catalogo categories`)
        #[arg(long)]
        categoria: String,

        /// Description
        #[arg(long)]
        descricao: String,

        /// Unit price
        #[arg(long)]
        preco: Decimal,

        /// Units in stock
        #[arg(long, default_value_t = 0)]
        estoque: u32,
    },
    /// Update any subset of a product's fields
    Update {
        /// Product identifier
        id: i32,

        #[arg(long)]
        nome: Option<String>,

        #[arg(long)]
        categoria: Option<String>,

        #[arg(long)]
        descricao: Option<String>,

        #[arg(long)]
        preco: Option<Decimal>,

        #[arg(long)]
        estoque: Option<u32>,
    },
    /// Delete a product
    Delete {
        /// Product identifier
        id: i32,
    },
    /// Print the fixed category set
    Categories,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::List {
            search,
            categoria,
            preco_min,
            preco_max,
            sort_by,
            desc,
        } => {
            commands::products::list(search, categoria, preco_min, preco_max, sort_by, desc)
                .await?;
        }
        Commands::Get { id } => commands::products::get(id).await?,
        Commands::Create {
            nome,
            categoria,
            descricao,
            preco,
            estoque,
        } => commands::products::create(nome, categoria, descricao, preco, estoque).await?,
        Commands::Update {
            id,
            nome,
            categoria,
            descricao,
            preco,
            estoque,
        } => {
            commands::products::update(id, nome, categoria, descricao, preco, estoque).await?;
        }
        Commands::Delete { id } => commands::products::delete(id).await?,
        Commands::Categories => commands::products::categories(),
    }
    Ok(())
}
