use uuid::Uuid;

use crate::domain::repository::{FavoriteRepository, RecipeRepository};
use crate::domain::types::Recipe;
use crate::error::RecipesServiceError;
use crate::usecase::ToggleOutcome;

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<R, F>
where
    R: RecipeRepository,
    F: FavoriteRepository,
{
    pub recipes: R,
    pub favorites: F,
}

impl<R, F> AddFavoriteUseCase<R, F>
where
    R: RecipeRepository,
    F: FavoriteRepository,
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
        if self.favorites.insert_if_absent(user_id, recipe_id).await? {
            Ok(ToggleOutcome::Created(recipe))
        } else {
            Ok(ToggleOutcome::AlreadyExists)
        }
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    /// Removing an absent favorite is a no-op success.
    pub async fn execute(&self, user_id: Uuid, recipe_id: i32) -> Result<(), RecipesServiceError> {
        self.favorites.delete(user_id, recipe_id).await?;
        Ok(())
    }
}
