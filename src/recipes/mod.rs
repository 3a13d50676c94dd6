// ABOUTME: Recipe domain module grouping the ingredient model and resolver
// ABOUTME: Re-exports the types used by the allocator, planner, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! Recipe domain: ingredient parsing and model-backed resolution

/// Ingredient model and bullet-line parsing
pub mod ingredient;
/// Model-backed recipe resolution
pub mod resolver;

pub use ingredient::{parse_ingredients, Ingredient};
pub use resolver::RecipeResolver;
