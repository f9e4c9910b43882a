//! sea-orm entities for the recipes service, one module per table.

pub mod favorites;
pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipe_tags;
pub mod recipes;
pub mod shopping_cart_entries;
pub mod subscriptions;
pub mod tags;
pub mod users;
