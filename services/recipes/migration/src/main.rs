use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(platter_recipes_migration::Migrator).await;
}
