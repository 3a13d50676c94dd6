// ABOUTME: Inventory seeder for Pantry Server development and demos
// ABOUTME: Populates stock levels and substitution pairs in the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! Inventory seeder for Pantry Server.
//!
//! This binary populates the database with sample stock levels and
//! substitution pairs for exercising the cart endpoints.
//!
//! Usage:
//! ```bash
//! # Preview what would be seeded
//! cargo run --bin seed-pantry -- --dry-run
//!
//! # Seed, clearing any existing rows first
//! cargo run --bin seed-pantry -- --reset
//! ```

use anyhow::Result;
use clap::Parser;
use pantry_server::config::DatabaseUrl;
use pantry_server::database::Database;
use pantry_server::logging;
use std::env;
use tracing::info;

/// Sample stock row
struct SeedItem {
    name: &'static str,
    qty_available: f64,
}

/// Sample substitution pair
struct SeedSubstitution {
    original: &'static str,
    substitute: &'static str,
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "pasta",
        qty_available: 2000.0,
    },
    SeedItem {
        name: "butter",
        qty_available: 500.0,
    },
    SeedItem {
        name: "all-purpose flour",
        qty_available: 1000.0,
    },
    SeedItem {
        name: "milk",
        qty_available: 2000.0,
    },
    SeedItem {
        name: "salt",
        qty_available: 100.0,
    },
    SeedItem {
        name: "tomato sauce",
        qty_available: 1500.0,
    },
    SeedItem {
        name: "basil",
        qty_available: 40.0,
    },
    SeedItem {
        name: "garlic",
        qty_available: 30.0,
    },
    SeedItem {
        name: "olive oil",
        qty_available: 1000.0,
    },
    SeedItem {
        name: "parmesan cheese",
        qty_available: 400.0,
    },
    SeedItem {
        name: "mozzarella cheese",
        qty_available: 600.0,
    },
    SeedItem {
        name: "onion",
        qty_available: 50.0,
    },
    SeedItem {
        name: "black pepper",
        qty_available: 80.0,
    },
];

const SEED_SUBSTITUTIONS: &[SeedSubstitution] = &[
    SeedSubstitution {
        original: "butter",
        substitute: "margarine",
    },
    SeedSubstitution {
        original: "butter",
        substitute: "olive oil",
    },
    SeedSubstitution {
        original: "milk",
        substitute: "oat milk",
    },
    SeedSubstitution {
        original: "all-purpose flour",
        substitute: "cornstarch",
    },
    SeedSubstitution {
        original: "basil",
        substitute: "oregano",
    },
    SeedSubstitution {
        original: "parmesan cheese",
        substitute: "pecorino romano",
    },
    SeedSubstitution {
        original: "tomato sauce",
        substitute: "crushed tomatoes",
    },
];

#[derive(Parser)]
#[command(
    name = "seed-pantry",
    about = "Pantry Server Inventory Seeder",
    long_about = "Populate the database with sample stock and substitution pairs"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing stock and substitution rows before seeding
    #[arg(long)]
    reset: bool,

    /// Print what would be seeded without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_default()?;
    let args = SeedArgs::parse();

    if args.dry_run {
        info!(
            "Dry run: would seed {} stock rows and {} substitution pairs",
            SEED_ITEMS.len(),
            SEED_SUBSTITUTIONS.len()
        );
        return Ok(());
    }

    let raw_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/pantry.db".to_string());
    let url = DatabaseUrl::parse_url(&raw_url);

    let database = Database::new(&url).await?;
    info!("Database ready: {}", url.to_connection_string());

    if args.reset {
        sqlx::query("DELETE FROM substitutions")
            .execute(database.pool())
            .await?;
        sqlx::query("DELETE FROM inventory")
            .execute(database.pool())
            .await?;
        info!("Cleared existing inventory and substitutions");
    }

    let inventory = database.inventory();

    for item in SEED_ITEMS {
        inventory.set_stock(item.name, item.qty_available).await?;
        info!("Seeded stock: {} = {}", item.name, item.qty_available);
    }

    for pair in SEED_SUBSTITUTIONS {
        inventory
            .add_substitution(pair.original, pair.substitute)
            .await?;
        info!("Seeded substitution: {} -> {}", pair.original, pair.substitute);
    }

    info!(
        "Seeding complete: {} stock rows, {} substitution pairs",
        SEED_ITEMS.len(),
        SEED_SUBSTITUTIONS.len()
    );

    Ok(())
}
