// ABOUTME: Cart route handlers for recipe allocation and weekly meal planning
// ABOUTME: Provides the add_to_cart and weekly_plan POST endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! Cart routes
//!
//! `POST /add_to_cart` resolves one recipe into ingredients and allocates
//! them against inventory. `POST /weekly_plan` does the same for every
//! recipe in a weekly plan and aggregates the results. Both handlers are
//! thin wrappers over the shared resolver, allocator, and planner.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::database::Recommendation;
use crate::errors::AppError;
use crate::planner::{aggregate_weekly_plan, WeeklyCartEntry, WeeklyPlan};
use crate::recipes::Ingredient;
use crate::server::ServerResources;

/// Request to allocate one recipe
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Recipe to estimate ingredients for
    pub recipe_name: String,
    /// Serving count
    pub servings: u32,
}

/// Response for a single-recipe allocation
#[derive(Debug, Serialize, Deserialize)]
pub struct AddToCartResponse {
    /// Ingredients whose stock decrement committed
    pub cart: Vec<Ingredient>,
    /// Shortfall notices in ingredient order
    pub recommendations: Vec<Recommendation>,
}

/// Request to allocate a weekly meal plan
#[derive(Debug, Deserialize)]
pub struct WeeklyPlanRequest {
    /// Day label to meal label to recipe name, in request-body order
    pub plan: WeeklyPlan,
    /// Serving count applied uniformly to every recipe in the plan
    pub servings: u32,
}

/// Response for a weekly plan allocation
#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyPlanResponse {
    /// Summed cart entries in first-seen-item order
    pub weekly_cart: Vec<WeeklyCartEntry>,
    /// All recipes' recommendations, concatenated
    pub weekly_recommendations: Vec<Recommendation>,
}

/// Cart routes handler
pub struct CartRoutes;

impl CartRoutes {
    /// Create all cart routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/add_to_cart", post(Self::add_to_cart))
            .route("/weekly_plan", post(Self::weekly_plan))
            .with_state(resources)
    }

    /// Resolve one recipe and allocate its ingredients
    async fn add_to_cart(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AddToCartRequest>,
    ) -> Result<Json<AddToCartResponse>, AppError> {
        if request.servings == 0 {
            return Err(AppError::invalid_input("servings must be positive"));
        }

        let ingredients = resources
            .resolver
            .resolve(&request.recipe_name, request.servings)
            .await?;

        let outcome = resources.database.inventory().allocate(&ingredients).await?;

        info!(
            recipe = %request.recipe_name,
            allocated = outcome.cart.len(),
            shortfalls = outcome.recommendations.len(),
            "add_to_cart complete"
        );

        Ok(Json(AddToCartResponse {
            cart: outcome.cart,
            recommendations: outcome.recommendations,
        }))
    }

    /// Resolve and allocate every recipe in a weekly plan
    async fn weekly_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<WeeklyPlanRequest>,
    ) -> Result<Json<WeeklyPlanResponse>, AppError> {
        if request.servings == 0 {
            return Err(AppError::invalid_input("servings must be positive"));
        }

        let inventory = resources.database.inventory();
        let outcome = aggregate_weekly_plan(
            &resources.resolver,
            &inventory,
            &request.plan,
            request.servings,
        )
        .await?;

        info!(
            items = outcome.weekly_cart.len(),
            shortfalls = outcome.weekly_recommendations.len(),
            "weekly_plan complete"
        );

        Ok(Json(WeeklyPlanResponse {
            weekly_cart: outcome.weekly_cart,
            weekly_recommendations: outcome.weekly_recommendations,
        }))
    }
}
