// ABOUTME: Few-shot prompt construction for ingredient estimation
// ABOUTME: Renders worked example recipes plus the target recipe header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Ingredient Estimation Prompts
//!
//! This module builds the few-shot prompt sent to the model. The textual
//! shape rendered here is the model-facing contract: the model is expected
//! to continue the pattern with bullet-formatted ingredient lines only, and
//! the parser in [`crate::recipes::ingredient`] tolerates exactly this
//! format.

/// One ingredient of a worked example recipe
struct ExampleIngredient {
    qty: f64,
    unit: &'static str,
    item: &'static str,
}

/// A worked example recipe used to steer the model's output format
struct ExampleRecipe {
    name: &'static str,
    servings: u32,
    ingredients: &'static [ExampleIngredient],
}

/// Fixed example recipes demonstrating the expected output format
const EXAMPLE_RECIPES: &[ExampleRecipe] = &[
    ExampleRecipe {
        name: "white sauce pasta",
        servings: 2,
        ingredients: &[
            ExampleIngredient {
                qty: 200.0,
                unit: "g",
                item: "pasta",
            },
            ExampleIngredient {
                qty: 30.0,
                unit: "g",
                item: "butter",
            },
            ExampleIngredient {
                qty: 20.0,
                unit: "g",
                item: "all-purpose flour",
            },
            ExampleIngredient {
                qty: 250.0,
                unit: "ml",
                item: "milk",
            },
            ExampleIngredient {
                qty: 1.0,
                unit: "tsp",
                item: "salt",
            },
        ],
    },
    ExampleRecipe {
        name: "tomato basil pasta",
        servings: 2,
        ingredients: &[
            ExampleIngredient {
                qty: 200.0,
                unit: "g",
                item: "pasta",
            },
            ExampleIngredient {
                qty: 150.0,
                unit: "ml",
                item: "tomato sauce",
            },
            ExampleIngredient {
                qty: 5.0,
                unit: "leaves",
                item: "basil",
            },
            ExampleIngredient {
                qty: 2.0,
                unit: "cloves",
                item: "garlic",
            },
        ],
    },
];

/// Render a single bullet line in the canonical `- {qty} {unit} {item}` form
///
/// This is the only place the bullet shape is defined; the parser's
/// round-trip property holds against this renderer.
#[must_use]
pub fn bullet_line(qty: f64, unit: &str, item: &str) -> String {
    format!("- {qty} {unit} {item}")
}

/// Render the recipe header line
fn recipe_header(name: &str, servings: u32) -> String {
    format!("Recipe: {name} for {servings} servings")
}

/// Render one example recipe block: header, `Ingredients:`, bullet lines
fn render_example(example: &ExampleRecipe) -> String {
    let mut block = recipe_header(example.name, example.servings);
    block.push_str("\nIngredients:");
    for ing in example.ingredients {
        block.push('\n');
        block.push_str(&bullet_line(ing.qty, ing.unit, ing.item));
    }
    block
}

/// Build the few-shot prompt for a target recipe
///
/// Each worked example is rendered in full, examples are joined with a blank
/// line, and the target recipe header is appended with no trailing bullet
/// content so the model continues the pattern.
#[must_use]
pub fn build_ingredient_prompt(recipe_name: &str, servings: u32) -> String {
    let examples = EXAMPLE_RECIPES
        .iter()
        .map(render_example)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{examples}\n\n{}\nIngredients:",
        recipe_header(recipe_name, servings)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_line_shape() {
        assert_eq!(bullet_line(200.0, "g", "pasta"), "- 200 g pasta");
        assert_eq!(bullet_line(1.5, "tsp", "salt"), "- 1.5 tsp salt");
        assert_eq!(
            bullet_line(20.0, "g", "all-purpose flour"),
            "- 20 g all-purpose flour"
        );
    }

    #[test]
    fn test_prompt_ends_with_target_header() {
        let prompt = build_ingredient_prompt("garlic bread", 4);
        assert!(prompt.ends_with("Recipe: garlic bread for 4 servings\nIngredients:"));
        // No bullet content after the target header
        let tail = prompt
            .rsplit("Ingredients:")
            .next()
            .expect("prompt has Ingredients markers");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_prompt_contains_worked_examples() {
        let prompt = build_ingredient_prompt("garlic bread", 4);
        assert!(prompt.starts_with("Recipe: white sauce pasta for 2 servings\nIngredients:\n"));
        assert!(prompt.contains("- 200 g pasta"));
        assert!(prompt.contains("- 2 cloves garlic"));
        // Examples separated by exactly one blank line
        assert!(prompt.contains("- 1 tsp salt\n\nRecipe: tomato basil pasta"));
    }
}
