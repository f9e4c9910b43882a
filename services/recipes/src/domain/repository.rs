#![allow(async_fn_in_trait)]

use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::types::{
    CartIngredientRow, Ingredient, IngredientAmount, IngredientSpec, Recipe, RecipeQuery, Tag,
    User,
};
use crate::error::RecipesServiceError;

/// Repository for user profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipesServiceError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RecipesServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RecipesServiceError>;
    async fn email_or_username_taken(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, RecipesServiceError>;
    async fn create(&self, user: &User) -> Result<(), RecipesServiceError>;
}

/// Repository for tags (reference data).
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, RecipesServiceError>;
    /// Returns the subset of `ids` that exist, deduplicated.
    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError>;
    async fn slug_exists(&self, slug: &str) -> Result<bool, RecipesServiceError>;
    async fn create(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<Tag, RecipesServiceError>;
}

/// Repository for the ingredient catalog.
pub trait IngredientRepository: Send + Sync {
    /// Full catalog, alphabetical by name.
    async fn list(&self) -> Result<Vec<Ingredient>, RecipesServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, RecipesServiceError>;
    /// Ingredients whose name starts with `query`, case-insensitive,
    /// alphabetical by name.
    async fn search_prefix(&self, query: &str) -> Result<Vec<Ingredient>, RecipesServiceError>;
    /// Ingredients whose name contains `query` anywhere, case-insensitive,
    /// alphabetical by name. Prefix matches are NOT excluded here; the
    /// search usecase subtracts them.
    async fn search_containing(&self, query: &str)
    -> Result<Vec<Ingredient>, RecipesServiceError>;
    /// Returns the subset of `ids` that exist, deduplicated.
    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError>;
    async fn count(&self) -> Result<u64, RecipesServiceError>;
    /// Bulk-insert (name, measurement_unit) rows. Returns rows written.
    async fn bulk_insert(&self, rows: &[(String, String)]) -> Result<u64, RecipesServiceError>;
}

/// Scalar fields for a new recipe; association rows ride alongside.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    pub author_id: Uuid,
}

/// Scalar fields replaced on recipe update.
#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
}

/// Repository for recipes and their association rows.
pub trait RecipeRepository: Send + Sync {
    /// Filtered recipe page, publish time descending.
    async fn list(
        &self,
        query: &RecipeQuery,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipesServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecipesServiceError>;

    async fn exists_by_name_and_author(
        &self,
        name: &str,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError>;

    /// Insert the recipe and its association rows in one transaction.
    async fn create(
        &self,
        recipe: &NewRecipe,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<Recipe, RecipesServiceError>;

    /// Replace scalar fields and associations in one transaction: all
    /// existing ingredient/tag rows for the recipe are deleted, then the
    /// new set is bulk-inserted.
    async fn replace(
        &self,
        recipe_id: i32,
        fields: &RecipeUpdate,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<(), RecipesServiceError>;

    /// Delete a recipe. Returns `true` if a row was deleted.
    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError>;

    /// Author's recipes, publish time descending, optionally limited.
    async fn list_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, RecipesServiceError>;

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError>;

    /// All (recipe_id, ingredient-with-amount) pairs for the given recipes.
    async fn ingredients_of(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(i32, IngredientAmount)>, RecipesServiceError>;

    /// All (recipe_id, tag) pairs for the given recipes.
    async fn tags_of(&self, recipe_ids: &[i32]) -> Result<Vec<(i32, Tag)>, RecipesServiceError>;
}

/// Repository for the favorites presence relation.
pub trait FavoriteRepository: Send + Sync {
    /// Insert unless present. Returns `false` when the row already existed;
    /// concurrent duplicate inserts are resolved by the storage key.
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError>;

    /// Delete any matching row. Returns `true` if one was deleted.
    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError>;

    /// Subset of `recipe_ids` the user has favorited.
    async fn filter_favorited(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError>;
}

/// Repository for the shopping-cart presence relation.
pub trait ShoppingCartRepository: Send + Sync {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError>;

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError>;

    /// Subset of `recipe_ids` present in the user's cart.
    async fn filter_in_cart(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError>;

    /// Every RecipeIngredient row belonging to any recipe in the user's
    /// cart, joined with the ingredient catalog. Unaggregated.
    async fn cart_ingredient_rows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CartIngredientRow>, RecipesServiceError>;
}

/// Repository for author subscriptions.
pub trait SubscriptionRepository: Send + Sync {
    async fn insert_if_absent(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError>;

    async fn delete(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError>;

    /// Authors the user subscribes to, newest subscription first.
    async fn list_authors(
        &self,
        subscriber_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError>;

    /// Subset of `author_ids` the user subscribes to.
    async fn filter_subscribed(
        &self,
        subscriber_id: Uuid,
        author_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, RecipesServiceError>;
}
