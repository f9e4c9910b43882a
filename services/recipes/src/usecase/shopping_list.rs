use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::ShoppingCartRepository;
use crate::error::RecipesServiceError;

/// Rendered shopping list, ready to be served as a text attachment.
pub struct ShoppingList {
    pub filename: String,
    pub body: String,
}

/// Joins every RecipeIngredient row across the user's cart recipes, merges
/// rows by (name, unit) summing amounts, and renders a plain-text report.
/// Group order is alphabetical, so the report is deterministic.
pub struct BuildShoppingListUseCase<C: ShoppingCartRepository> {
    pub carts: C,
}

impl<C: ShoppingCartRepository> BuildShoppingListUseCase<C> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<ShoppingList, RecipesServiceError> {
        let rows = self.carts.cart_ingredient_rows(user_id).await?;
        if rows.is_empty() {
            return Err(RecipesServiceError::EmptyShoppingCart);
        }

        let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();
        for row in rows {
            *totals
                .entry((row.name, row.measurement_unit))
                .or_default() += i64::from(row.amount);
        }

        let date = today.format("%Y-%m-%d");
        let mut body = format!("Shopping list ({date})\n\n");
        for ((name, unit), total) in &totals {
            body.push_str(&format!("{name}:  {total} {unit}\n"));
        }

        Ok(ShoppingList {
            filename: format!("shopping_list_{date}.txt"),
            body,
        })
    }
}
