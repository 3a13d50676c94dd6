// ABOUTME: Route module organization for Pantry Server HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! Route module for the Pantry Server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the resolver, allocator, and planner.

/// Cart and weekly-plan routes
pub mod cart;
/// Health check and system status routes
pub mod health;

pub use cart::CartRoutes;
pub use health::HealthRoutes;
