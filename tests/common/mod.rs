// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Provides a scripted model provider and database setup utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

#![allow(clippy::unwrap_used, dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;

use pantry_server::config::{DatabaseConfig, DatabaseUrl, LlmConfig, ServerConfig};
use pantry_server::database::Database;
use pantry_server::errors::AppError;
use pantry_server::llm::{ChatRequest, ChatResponse, LlmProvider};

/// Canned completion for the white sauce pasta fixture recipe
pub const WHITE_SAUCE_PASTA: &str =
    "- 200 g pasta\n- 30 g butter\n- 20 g all-purpose flour\n- 250 ml milk\n- 1 tsp salt";

/// Canned completion for the garlic bread fixture recipe
pub const GARLIC_BREAD: &str = "- 2 cloves garlic\n- 1 pieces bread";

/// Provider that answers from a fixed recipe-to-completion table
///
/// The prompt's target header names the recipe, so lookup is by substring
/// match against the last user message.
pub struct RecipeBookProvider {
    completions: HashMap<String, String>,
}

impl RecipeBookProvider {
    #[must_use]
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            completions: entries
                .iter()
                .map(|(recipe, completion)| ((*recipe).to_owned(), (*completion).to_owned()))
                .collect(),
        }
    }
}

#[async_trait]
impl LlmProvider for RecipeBookProvider {
    fn name(&self) -> &'static str {
        "recipe-book"
    }

    fn display_name(&self) -> &'static str {
        "Recipe Book"
    }

    fn default_model(&self) -> &str {
        "recipe-book-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let prompt = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        // The target header is the last "Recipe: ..." block; the earlier
        // blocks are worked examples and must not drive the lookup.
        let target = prompt.rsplit("Recipe: ").next().unwrap_or_default();

        let content = self
            .completions
            .iter()
            .find(|(recipe, _)| target.starts_with(&format!("{recipe} for")))
            .map(|(_, completion)| completion.clone())
            .ok_or_else(|| AppError::model_unavailable("no scripted completion for prompt"))?;

        Ok(ChatResponse {
            content,
            model: "recipe-book-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Fresh in-memory database with migrations applied
pub async fn test_database() -> Database {
    Database::new(&DatabaseUrl::Memory).await.unwrap()
}

/// Configuration for tests; no real credentials involved
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        llm: LlmConfig {
            api_key: "test-key".to_owned(),
            model: "recipe-book-model".to_owned(),
            temperature: 0.2,
        },
    }
}
