// ABOUTME: Weekly meal plan aggregation across per-recipe resolution and allocation
// ABOUTME: Sums allocated quantities per item and collects all recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Weekly Planner
//!
//! Iterates a weekly meal plan in mapping order (days, then meals within a
//! day) and runs resolution plus allocation for every recipe as an
//! independent unit of work. Each recipe's allocation commits its own
//! transaction, so a later recipe sees stock already consumed by an earlier
//! one within the same plan.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::database::{InventoryManager, Recommendation};
use crate::errors::AppResult;
use crate::recipes::RecipeResolver;

/// A weekly meal plan: day label to meal label to recipe name
///
/// `IndexMap` preserves the request body's object order, which fixes the
/// iteration order of days and meals.
pub type WeeklyPlan = IndexMap<String, IndexMap<String, String>>;

/// One aggregated cart entry in first-seen-item order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCartEntry {
    /// Item name
    pub item: String,
    /// Running sum of allocated quantity across the plan
    pub qty: f64,
    /// Unit from the last recipe (in iteration order) that contributed the
    /// item; units are not validated for consistency across recipes
    pub unit: String,
}

/// Aggregated result of a weekly plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyOutcome {
    /// Summed cart entries in first-seen-item order
    pub weekly_cart: Vec<WeeklyCartEntry>,
    /// Every recipe's recommendations, concatenated without deduplication
    pub weekly_recommendations: Vec<Recommendation>,
}

/// Resolve and allocate every recipe in a plan, then aggregate the carts
///
/// Recipes run sequentially; there is no cross-recipe transaction. A failure
/// in any recipe's resolution or allocation aborts the remaining iteration
/// and surfaces to the caller with nothing further committed.
///
/// # Errors
///
/// Propagates resolver and allocation errors from the first failing recipe.
#[instrument(skip_all, fields(days = plan.len(), servings))]
pub async fn aggregate_weekly_plan(
    resolver: &RecipeResolver,
    inventory: &InventoryManager,
    plan: &WeeklyPlan,
    servings: u32,
) -> AppResult<WeeklyOutcome> {
    let mut summed: IndexMap<String, (f64, String)> = IndexMap::new();
    let mut weekly_recommendations = Vec::new();

    for (day, meals) in plan {
        for (meal, recipe_name) in meals {
            debug!(day, meal, recipe = recipe_name, "Planning recipe");

            let ingredients = resolver.resolve(recipe_name, servings).await?;
            let outcome = inventory.allocate(&ingredients).await?;

            for entry in outcome.cart {
                let slot = summed
                    .entry(entry.item)
                    .or_insert_with(|| (0.0, String::new()));
                slot.0 += entry.qty;
                // Last writer wins for the unit; quantities keep summing
                slot.1 = entry.unit;
            }

            weekly_recommendations.extend(outcome.recommendations);
        }
    }

    let weekly_cart = summed
        .into_iter()
        .map(|(item, (qty, unit))| WeeklyCartEntry { item, qty, unit })
        .collect();

    Ok(WeeklyOutcome {
        weekly_cart,
        weekly_recommendations,
    })
}
