// ABOUTME: Transactional inventory allocation and substitution recommendations
// ABOUTME: Checks and decrements stock per ingredient inside one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Inventory Allocator
//!
//! For an ordered ingredient list, opens one transaction against the
//! inventory store; each ingredient is either allocated (stock decremented,
//! ingredient appended to the cart) or routed to the recommendation path
//! with its candidate substitutes. The transaction boundary prevents two
//! concurrent requests from both observing sufficient stock and
//! over-allocating the same item.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use tracing::{debug, instrument};

use crate::errors::AppResult;
use crate::recipes::Ingredient;

/// A shortfall notice for one ingredient, carrying candidate substitutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item name that could not be allocated
    pub needed: String,
    /// Ordered candidate substitutes; may be empty
    pub alternatives: Vec<String>,
}

/// Result of allocating one ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Ingredients whose stock decrement committed
    pub cart: Vec<Ingredient>,
    /// Shortfall notices in input order
    pub recommendations: Vec<Recommendation>,
}

/// Inventory database operations manager
pub struct InventoryManager {
    pool: SqlitePool,
}

impl InventoryManager {
    /// Create a new inventory manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomically check and decrement stock for an ordered ingredient list
    ///
    /// All lookups and decrements for the list run in one transaction. Per
    /// ingredient, in input order: if a row with the exact item name exists
    /// and has sufficient stock, the quantity is decremented and the
    /// ingredient joins the cart; otherwise substitutes are looked up and a
    /// [`Recommendation`] is appended. A missing inventory row is not an
    /// error. Any database failure aborts the whole allocation; no partial
    /// cart is returned.
    ///
    /// # Errors
    ///
    /// Returns a database error if the transaction cannot be opened,
    /// any statement fails, or the commit fails.
    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    pub async fn allocate(&self, ingredients: &[Ingredient]) -> AppResult<AllocationOutcome> {
        let mut cart = Vec::new();
        let mut recommendations = Vec::new();

        let mut tx = self.pool.begin().await?;

        for ingredient in ingredients {
            let available: Option<f64> =
                sqlx::query_scalar("SELECT qty_available FROM inventory WHERE name = $1")
                    .bind(&ingredient.item)
                    .fetch_optional(&mut *tx)
                    .await?;

            match available {
                Some(qty_available) if qty_available >= ingredient.qty => {
                    sqlx::query(
                        "UPDATE inventory SET qty_available = qty_available - $1 WHERE name = $2",
                    )
                    .bind(ingredient.qty)
                    .bind(&ingredient.item)
                    .execute(&mut *tx)
                    .await?;

                    cart.push(ingredient.clone());
                }
                _ => {
                    let alternatives: Vec<String> = sqlx::query_scalar(
                        "SELECT substitute FROM substitutions WHERE original = $1 ORDER BY id",
                    )
                    .bind(&ingredient.item)
                    .fetch_all(&mut *tx)
                    .await?;

                    recommendations.push(Recommendation {
                        needed: ingredient.item.clone(),
                        alternatives,
                    });
                }
            }
        }

        tx.commit().await?;

        debug!(
            allocated = cart.len(),
            shortfalls = recommendations.len(),
            "Allocation committed"
        );

        Ok(AllocationOutcome {
            cart,
            recommendations,
        })
    }

    /// Set the available stock for an item, inserting the row if missing
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn set_stock(&self, name: &str, qty_available: f64) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO inventory (name, qty_available) VALUES ($1, $2)
            ON CONFLICT(name) DO UPDATE SET qty_available = excluded.qty_available
            ",
        )
        .bind(name)
        .bind(qty_available)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Current stock for an item, `None` if the item is not tracked
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn stock_level(&self, name: &str) -> AppResult<Option<f64>> {
        let qty = sqlx::query_scalar("SELECT qty_available FROM inventory WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(qty)
    }

    /// Record a substitute for an original item
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn add_substitution(&self, original: &str, substitute: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO substitutions (original, substitute) VALUES ($1, $2)")
            .bind(original)
            .bind(substitute)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
