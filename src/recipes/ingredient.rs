// ABOUTME: Ingredient model and bullet-line parsing of model completions
// ABOUTME: Turns free-text model output into structured ingredient records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

//! # Ingredient Parsing
//!
//! Turns multi-line model output into structured [`Ingredient`] records.
//! Only lines beginning with the bullet marker (`-`) contribute; everything
//! else is ignored. This parser tolerates exactly the output format
//! demonstrated by the few-shot examples in [`crate::llm::prompts`] — it is
//! not a general natural-language parser.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::llm::prompts::bullet_line;

/// The bullet marker that designates an ingredient line
const BULLET_MARKER: char = '-';

/// A structured ingredient record
///
/// Produced by parsing; immutable once created. Appears in carts when its
/// inventory decrement has committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Item name (exact-match key into inventory)
    pub item: String,
    /// Quantity in the given unit
    pub qty: f64,
    /// Unit text as emitted by the model
    pub unit: String,
}

impl Ingredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(item: impl Into<String>, qty: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty,
            unit: unit.into(),
        }
    }

    /// Render in the canonical `- {qty} {unit} {item}` bullet form
    #[must_use]
    pub fn to_bullet_line(&self) -> String {
        bullet_line(self.qty, &self.unit, &self.item)
    }
}

/// Parse multi-line text into an ordered sequence of ingredients
///
/// For each line beginning with `-`: strip the marker, split on whitespace;
/// the first token is the quantity, the second is the unit, and the remaining
/// tokens joined by single spaces form the item name. Lines not starting with
/// the marker are skipped silently.
///
/// # Errors
///
/// Returns a parse error when a bullet line's quantity token is not numeric,
/// or when fewer than two tokens follow the marker.
pub fn parse_ingredients(text: &str) -> AppResult<Vec<Ingredient>> {
    let mut out = Vec::new();

    for line in text.lines() {
        if !line.starts_with(BULLET_MARKER) {
            continue;
        }

        let tokens: Vec<&str> = line[BULLET_MARKER.len_utf8()..]
            .trim()
            .split_whitespace()
            .collect();

        if tokens.len() < 2 {
            return Err(AppError::parse(format!(
                "ingredient line needs a quantity and unit: {line:?}"
            )));
        }

        let qty: f64 = tokens[0].parse().map_err(|_| {
            AppError::parse(format!(
                "quantity token {:?} is not numeric in line {line:?}",
                tokens[0]
            ))
        })?;

        out.push(Ingredient {
            item: tokens[2..].join(" "),
            qty,
            unit: tokens[1].to_owned(),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_well_formed_lines() {
        let text = "- 200 g pasta\n- 30 g butter\n- 250 ml milk";
        let ingredients = parse_ingredients(text).unwrap();
        assert_eq!(
            ingredients,
            vec![
                Ingredient::new("pasta", 200.0, "g"),
                Ingredient::new("butter", 30.0, "g"),
                Ingredient::new("milk", 250.0, "ml"),
            ]
        );
    }

    #[test]
    fn test_multi_word_item_names() {
        let ingredients = parse_ingredients("- 20 g all-purpose flour").unwrap();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].item, "all-purpose flour");
        assert_eq!(ingredients[0].qty, 20.0);
        assert_eq!(ingredients[0].unit, "g");
    }

    #[test]
    fn test_non_bullet_lines_never_contribute() {
        let text = "Here are the ingredients:\n- 200 g pasta\nEnjoy your meal!\n2 cups water";
        let ingredients = parse_ingredients(text).unwrap();
        assert_eq!(ingredients, vec![Ingredient::new("pasta", 200.0, "g")]);
    }

    #[test]
    fn test_empty_text_yields_empty_list() {
        assert!(parse_ingredients("").unwrap().is_empty());
        assert!(parse_ingredients("no bullets here").unwrap().is_empty());
    }

    #[test]
    fn test_fractional_quantities() {
        let ingredients = parse_ingredients("- 1.5 tsp salt\n- 0.25 cups sugar").unwrap();
        assert_eq!(ingredients[0].qty, 1.5);
        assert_eq!(ingredients[1].qty, 0.25);
    }

    #[test]
    fn test_non_numeric_quantity_is_parse_error() {
        let err = parse_ingredients("- some g pasta").unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
    }

    #[test]
    fn test_missing_unit_and_item_is_parse_error() {
        let err = parse_ingredients("- 200").unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);

        let err = parse_ingredients("-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
    }

    #[test]
    fn test_two_tokens_parse_with_empty_item() {
        // qty + unit with no item name is tolerated; item is empty
        let ingredients = parse_ingredients("- 200 g").unwrap();
        assert_eq!(ingredients, vec![Ingredient::new("", 200.0, "g")]);
    }

    #[test]
    fn test_render_round_trip() {
        for line in ["- 200 g pasta", "- 1.5 tsp salt", "- 5 leaves basil"] {
            let parsed = parse_ingredients(line).unwrap();
            assert_eq!(parsed.len(), 1);
            assert_eq!(parsed[0].to_bullet_line(), line);
        }
    }
}
