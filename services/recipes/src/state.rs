use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbFavoriteRepository, DbIngredientRepository, DbRecipeRepository, DbShoppingCartRepository,
    DbSubscriptionRepository, DbTagRepository, DbUserRepository,
};
use crate::usecase::recipe::RecipeViews;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn tag_repo(&self) -> DbTagRepository {
        DbTagRepository {
            db: self.db.clone(),
        }
    }

    pub fn ingredient_repo(&self) -> DbIngredientRepository {
        DbIngredientRepository {
            db: self.db.clone(),
        }
    }

    pub fn recipe_repo(&self) -> DbRecipeRepository {
        DbRecipeRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn shopping_cart_repo(&self) -> DbShoppingCartRepository {
        DbShoppingCartRepository {
            db: self.db.clone(),
        }
    }

    pub fn subscription_repo(&self) -> DbSubscriptionRepository {
        DbSubscriptionRepository {
            db: self.db.clone(),
        }
    }

    /// Repository bundle for assembling full recipe views.
    pub fn recipe_views(
        &self,
    ) -> RecipeViews<
        DbRecipeRepository,
        DbUserRepository,
        DbFavoriteRepository,
        DbShoppingCartRepository,
        DbSubscriptionRepository,
    > {
        RecipeViews {
            recipes: self.recipe_repo(),
            users: self.user_repo(),
            favorites: self.favorite_repo(),
            carts: self.shopping_cart_repo(),
            subscriptions: self.subscription_repo(),
        }
    }
}
