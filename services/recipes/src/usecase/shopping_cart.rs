use uuid::Uuid;

use crate::domain::repository::{RecipeRepository, ShoppingCartRepository};
use crate::domain::types::Recipe;
use crate::error::RecipesServiceError;
use crate::usecase::ToggleOutcome;

// ── AddToShoppingCart ────────────────────────────────────────────────────────

pub struct AddToShoppingCartUseCase<R, C>
where
    R: RecipeRepository,
    C: ShoppingCartRepository,
{
    pub recipes: R,
    pub carts: C,
}

impl<R, C> AddToShoppingCartUseCase<R, C>
where
    R: RecipeRepository,
    C: ShoppingCartRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<ToggleOutcome<Recipe>, RecipesServiceError> {
        let recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        if self.carts.insert_if_absent(user_id, recipe_id).await? {
            Ok(ToggleOutcome::Created(recipe))
        } else {
            Ok(ToggleOutcome::AlreadyExists)
        }
    }
}

// ── RemoveFromShoppingCart ───────────────────────────────────────────────────

pub struct RemoveFromShoppingCartUseCase<C: ShoppingCartRepository> {
    pub carts: C,
}

impl<C: ShoppingCartRepository> RemoveFromShoppingCartUseCase<C> {
    /// Removing an absent entry is a no-op success.
    pub async fn execute(&self, user_id: Uuid, recipe_id: i32) -> Result<(), RecipesServiceError> {
        self.carts.delete(user_id, recipe_id).await?;
        Ok(())
    }
}
