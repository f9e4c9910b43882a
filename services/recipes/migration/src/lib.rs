use sea_orm_migration::prelude::*;

mod m20260510_000001_create_users;
mod m20260510_000002_create_tags;
mod m20260510_000003_create_ingredients;
mod m20260510_000004_create_recipes;
mod m20260510_000005_create_recipe_ingredients;
mod m20260510_000006_create_recipe_tags;
mod m20260510_000007_create_favorites;
mod m20260510_000008_create_shopping_cart_entries;
mod m20260510_000009_create_subscriptions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260510_000001_create_users::Migration),
            Box::new(m20260510_000002_create_tags::Migration),
            Box::new(m20260510_000003_create_ingredients::Migration),
            Box::new(m20260510_000004_create_recipes::Migration),
            Box::new(m20260510_000005_create_recipe_ingredients::Migration),
            Box::new(m20260510_000006_create_recipe_tags::Migration),
            Box::new(m20260510_000007_create_favorites::Migration),
            Box::new(m20260510_000008_create_shopping_cart_entries::Migration),
            Box::new(m20260510_000009_create_subscriptions::Migration),
        ]
    }
}
