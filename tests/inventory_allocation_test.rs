// ABOUTME: Integration tests for transactional inventory allocation
// ABOUTME: Validates stock decrements, shortfall routing, and substitution lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Server

#![allow(clippy::unwrap_used)]

use pantry_server::config::DatabaseUrl;
use pantry_server::database::Database;
use pantry_server::recipes::Ingredient;

async fn test_database() -> Database {
    Database::new(&DatabaseUrl::Memory).await.unwrap()
}

#[tokio::test]
async fn test_file_backed_database_is_created_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pantry.db");
    let url = DatabaseUrl::parse_url(&format!("sqlite:{}", path.display()));

    {
        let db = Database::new(&url).await.unwrap();
        db.inventory().set_stock("pasta", 500.0).await.unwrap();
    }

    let db = Database::new(&url).await.unwrap();
    assert_eq!(
        db.inventory().stock_level("pasta").await.unwrap(),
        Some(500.0)
    );
}

fn ing(item: &str, qty: f64, unit: &str) -> Ingredient {
    Ingredient::new(item, qty, unit)
}

#[tokio::test]
async fn test_sufficient_stock_is_decremented_once() {
    let db = test_database().await;
    let inventory = db.inventory();
    inventory.set_stock("pasta", 500.0).await.unwrap();

    let outcome = inventory
        .allocate(&[ing("pasta", 200.0, "g")])
        .await
        .unwrap();

    assert_eq!(outcome.cart, vec![ing("pasta", 200.0, "g")]);
    assert!(outcome.recommendations.is_empty());
    assert_eq!(inventory.stock_level("pasta").await.unwrap(), Some(300.0));
}

#[tokio::test]
async fn test_insufficient_stock_leaves_row_untouched() {
    let db = test_database().await;
    let inventory = db.inventory();
    inventory.set_stock("butter", 10.0).await.unwrap();
    inventory
        .add_substitution("butter", "margarine")
        .await
        .unwrap();
    inventory
        .add_substitution("butter", "olive oil")
        .await
        .unwrap();

    let outcome = inventory
        .allocate(&[ing("butter", 30.0, "g")])
        .await
        .unwrap();

    assert!(outcome.cart.is_empty());
    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(outcome.recommendations[0].needed, "butter");
    // Insertion order is preserved by the id ordering
    assert_eq!(
        outcome.recommendations[0].alternatives,
        vec!["margarine".to_owned(), "olive oil".to_owned()]
    );
    assert_eq!(inventory.stock_level("butter").await.unwrap(), Some(10.0));
}

#[tokio::test]
async fn test_untracked_item_yields_empty_alternatives() {
    let db = test_database().await;
    let inventory = db.inventory();

    let outcome = inventory
        .allocate(&[ing("saffron", 1.0, "g")])
        .await
        .unwrap();

    assert!(outcome.cart.is_empty());
    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(outcome.recommendations[0].needed, "saffron");
    assert!(outcome.recommendations[0].alternatives.is_empty());
}

#[tokio::test]
async fn test_exact_stock_match_allocates_to_zero() {
    let db = test_database().await;
    let inventory = db.inventory();
    inventory.set_stock("salt", 1.0).await.unwrap();

    let outcome = inventory.allocate(&[ing("salt", 1.0, "tsp")]).await.unwrap();

    assert_eq!(outcome.cart.len(), 1);
    assert_eq!(inventory.stock_level("salt").await.unwrap(), Some(0.0));
}

#[tokio::test]
async fn test_mixed_list_preserves_input_order() {
    let db = test_database().await;
    let inventory = db.inventory();
    inventory.set_stock("pasta", 500.0).await.unwrap();
    inventory.set_stock("butter", 10.0).await.unwrap();
    inventory.set_stock("milk", 1000.0).await.unwrap();

    let outcome = inventory
        .allocate(&[
            ing("pasta", 200.0, "g"),
            ing("butter", 30.0, "g"),
            ing("all-purpose flour", 20.0, "g"),
            ing("milk", 250.0, "ml"),
        ])
        .await
        .unwrap();

    let cart_items: Vec<&str> = outcome.cart.iter().map(|i| i.item.as_str()).collect();
    assert_eq!(cart_items, vec!["pasta", "milk"]);

    let needed: Vec<&str> = outcome
        .recommendations
        .iter()
        .map(|r| r.needed.as_str())
        .collect();
    assert_eq!(needed, vec!["butter", "all-purpose flour"]);
}

#[tokio::test]
async fn test_repeated_item_in_one_list_sees_earlier_decrement() {
    let db = test_database().await;
    let inventory = db.inventory();
    inventory.set_stock("garlic", 3.0).await.unwrap();

    let outcome = inventory
        .allocate(&[ing("garlic", 2.0, "cloves"), ing("garlic", 2.0, "cloves")])
        .await
        .unwrap();

    // The second occurrence runs against the already-decremented stock
    assert_eq!(outcome.cart.len(), 1);
    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(inventory.stock_level("garlic").await.unwrap(), Some(1.0));
}

#[tokio::test]
async fn test_set_stock_upserts() {
    let db = test_database().await;
    let inventory = db.inventory();

    inventory.set_stock("basil", 10.0).await.unwrap();
    inventory.set_stock("basil", 40.0).await.unwrap();

    assert_eq!(inventory.stock_level("basil").await.unwrap(), Some(40.0));
}

#[tokio::test]
async fn test_stock_level_missing_item_is_none() {
    let db = test_database().await;
    let inventory = db.inventory();

    assert_eq!(inventory.stock_level("truffle").await.unwrap(), None);
}

#[tokio::test]
async fn test_empty_ingredient_list_is_a_no_op() {
    let db = test_database().await;
    let inventory = db.inventory();

    let outcome = inventory.allocate(&[]).await.unwrap();

    assert!(outcome.cart.is_empty());
    assert!(outcome.recommendations.is_empty());
}
