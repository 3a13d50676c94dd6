// ABOUTME: Main library entry point for the Pantry Server grocery backend
// ABOUTME: Provides recipe ingredient estimation and inventory allocation over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

#![deny(unsafe_code)]

//! # Pantry Server
//!
//! A grocery backend that turns recipe names into shopping carts. A language
//! model estimates the ingredient list for a recipe at a serving count, and
//! the inventory allocator decrements stock for what it can fulfill while
//! recommending substitutes for what it cannot.
//!
//! ## Features
//!
//! - **Ingredient estimation**: Few-shot prompting against the Groq API
//! - **Inventory allocation**: Transactional stock decrements with
//!   substitution recommendations for shortfalls
//! - **Weekly planning**: Aggregates a full week of meals into one cart
//! - **HTTP API**: `POST /add_to_cart` and `POST /weekly_plan` via axum
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Llm**: Chat completion provider abstraction and the Groq client
//! - **Recipes**: Prompt construction, completion parsing, and resolution
//! - **Database**: SQLite-backed inventory and substitution storage
//! - **Planner**: Weekly plan aggregation over per-recipe allocation
//! - **Routes**: Thin HTTP handlers over the shared resources
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_server::config::ServerConfig;
//! use pantry_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pantry Server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod planner;
pub mod recipes;
pub mod routes;
pub mod server;
