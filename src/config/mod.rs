// ABOUTME: Configuration module grouping environment-based server settings
// ABOUTME: Re-exports the ServerConfig types used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! Configuration management for the Pantry Server

/// Environment-based configuration management
pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, LlmConfig, ServerConfig};
