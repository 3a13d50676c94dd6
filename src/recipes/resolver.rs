// ABOUTME: Recipe resolution combining prompt building, model completion, and parsing
// ABOUTME: Produces a structured ingredient list for one recipe and serving count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Recipe Resolver
//!
//! Given a recipe name and serving count, builds the few-shot prompt, asks
//! the model provider for one completion with low-temperature sampling, and
//! parses the completion into an ordered ingredient list.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{prompts::build_ingredient_prompt, ChatMessage, ChatRequest, LlmProvider};
use crate::recipes::{parse_ingredients, Ingredient};

/// Resolves recipes into ingredient lists via the model provider
pub struct RecipeResolver {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl RecipeResolver {
    /// Create a resolver around a provider with the configured model settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, llm_config: &LlmConfig) -> Self {
        Self {
            provider,
            model: llm_config.model.clone(),
            temperature: llm_config.temperature,
        }
    }

    /// Resolve one recipe into an ordered ingredient list
    ///
    /// # Errors
    ///
    /// Returns `ModelUnavailable` when the provider cannot be reached or
    /// returns no usable completion, and propagates `ParseError` when the
    /// completion text does not match the bullet grammar.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn resolve(&self, recipe_name: &str, servings: u32) -> AppResult<Vec<Ingredient>> {
        let prompt = build_ingredient_prompt(recipe_name, servings);

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_model(self.model.clone())
            .with_temperature(self.temperature);

        let response = self.provider.complete(&request).await?;

        if response.content.trim().is_empty() {
            return Err(AppError::model_unavailable(format!(
                "{} returned an empty completion for recipe {recipe_name:?}",
                self.provider.display_name()
            )));
        }

        let ingredients = parse_ingredients(&response.content)?;

        debug!(
            recipe = recipe_name,
            count = ingredients.len(),
            "Resolved ingredient list"
        );

        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use async_trait::async_trait;
    use crate::llm::ChatResponse;

    /// Provider returning a fixed completion, for exercising the resolver
    struct ScriptedProvider {
        completion: String,
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn display_name(&self) -> &'static str {
            "Scripted"
        }

        fn default_model(&self) -> &str {
            "scripted-model"
        }

        async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
            Ok(ChatResponse {
                content: self.completion.clone(),
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            })
        }

        async fn health_check(&self) -> Result<bool, AppError> {
            Ok(true)
        }
    }

    fn resolver_with(completion: &str) -> RecipeResolver {
        RecipeResolver::new(
            Arc::new(ScriptedProvider {
                completion: completion.to_owned(),
            }),
            &LlmConfig {
                api_key: "test".to_owned(),
                model: "scripted-model".to_owned(),
                temperature: 0.2,
            },
        )
    }

    #[tokio::test]
    async fn test_resolve_parses_completion() {
        let resolver = resolver_with("- 200 g pasta\n- 30 g butter");
        let ingredients = resolver.resolve("white sauce pasta", 2).await.unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].item, "pasta");
        assert_eq!(ingredients[1].item, "butter");
    }

    #[tokio::test]
    async fn test_empty_completion_is_model_unavailable() {
        let resolver = resolver_with("   \n  ");
        let err = resolver.resolve("white sauce pasta", 2).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ModelUnavailable);
    }

    #[tokio::test]
    async fn test_bad_completion_propagates_parse_error() {
        let resolver = resolver_with("- lots g pasta");
        let err = resolver.resolve("white sauce pasta", 2).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
    }
}
