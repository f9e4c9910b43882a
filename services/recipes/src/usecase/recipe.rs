use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::repository::{
    FavoriteRepository, IngredientRepository, NewRecipe, RecipeRepository, RecipeUpdate,
    ShoppingCartRepository, SubscriptionRepository, TagRepository, UserRepository,
};
use crate::domain::types::{
    IngredientSpec, MAX_AMOUNT, MAX_COOKING_TIME, MIN_AMOUNT, MIN_COOKING_TIME, Recipe,
    RecipeDetail, RecipeFilter, RecipeInput, RecipeQuery,
};
use crate::error::RecipesServiceError;

// ── Input validation ─────────────────────────────────────────────────────────

/// Validate a recipe submission before any mutation. Returns the ingredient
/// specs and tag ids once every in-memory check passed; referenced-id
/// existence is checked against the repositories by the callers.
pub fn validate_input(
    input: &RecipeInput,
) -> Result<(Vec<IngredientSpec>, Vec<i32>), RecipesServiceError> {
    let ingredients = match input.ingredients.as_deref() {
        Some(specs) if !specs.is_empty() => specs.to_vec(),
        _ => return Err(RecipesServiceError::MissingIngredients),
    };
    let tags = match input.tags.as_deref() {
        Some(ids) if !ids.is_empty() => ids.to_vec(),
        _ => return Err(RecipesServiceError::MissingTags),
    };

    if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&input.cooking_time) {
        return Err(RecipesServiceError::InvalidCookingTime);
    }

    let mut seen_ingredients = HashSet::new();
    for spec in &ingredients {
        if !seen_ingredients.insert(spec.id) {
            return Err(RecipesServiceError::DuplicateIngredient);
        }
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&spec.amount) {
            return Err(RecipesServiceError::InvalidAmount);
        }
    }

    let mut seen_tags = HashSet::new();
    for tag_id in &tags {
        if !seen_tags.insert(*tag_id) {
            return Err(RecipesServiceError::DuplicateTag);
        }
    }

    Ok((ingredients, tags))
}

async fn check_referenced_ids<I: IngredientRepository, T: TagRepository>(
    ingredient_repo: &I,
    tag_repo: &T,
    ingredients: &[IngredientSpec],
    tags: &[i32],
) -> Result<(), RecipesServiceError> {
    let ingredient_ids: Vec<i32> = ingredients.iter().map(|s| s.id).collect();
    let existing = ingredient_repo.find_existing_ids(&ingredient_ids).await?;
    if existing.len() != ingredient_ids.len() {
        return Err(RecipesServiceError::IngredientNotFound);
    }
    let existing = tag_repo.find_existing_ids(tags).await?;
    if existing.len() != tags.len() {
        return Err(RecipesServiceError::TagNotFound);
    }
    Ok(())
}

// ── CreateRecipe ─────────────────────────────────────────────────────────────

pub struct CreateRecipeUseCase<R, I, T>
where
    R: RecipeRepository,
    I: IngredientRepository,
    T: TagRepository,
{
    pub recipes: R,
    pub ingredients: I,
    pub tags: T,
}

impl<R, I, T> CreateRecipeUseCase<R, I, T>
where
    R: RecipeRepository,
    I: IngredientRepository,
    T: TagRepository,
{
    pub async fn execute(
        &self,
        author_id: Uuid,
        input: RecipeInput,
    ) -> Result<Recipe, RecipesServiceError> {
        let (ingredients, tags) = validate_input(&input)?;
        check_referenced_ids(&self.ingredients, &self.tags, &ingredients, &tags).await?;
        if self
            .recipes
            .exists_by_name_and_author(&input.name, author_id)
            .await?
        {
            return Err(RecipesServiceError::AlreadyPublished);
        }
        let new_recipe = NewRecipe {
            name: input.name,
            text: input.text,
            cooking_time: input.cooking_time,
            image: input.image,
            author_id,
        };
        self.recipes.create(&new_recipe, &ingredients, &tags).await
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

pub struct UpdateRecipeUseCase<R, I, T>
where
    R: RecipeRepository,
    I: IngredientRepository,
    T: TagRepository,
{
    pub recipes: R,
    pub ingredients: I,
    pub tags: T,
}

impl<R, I, T> UpdateRecipeUseCase<R, I, T>
where
    R: RecipeRepository,
    I: IngredientRepository,
    T: TagRepository,
{
    /// Replace the recipe's scalar fields and its whole association set.
    /// Only the author or an admin may edit.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_is_admin: bool,
        recipe_id: i32,
        input: RecipeInput,
    ) -> Result<(), RecipesServiceError> {
        let recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        if recipe.author_id != caller_id && !caller_is_admin {
            return Err(RecipesServiceError::Forbidden);
        }
        let (ingredients, tags) = validate_input(&input)?;
        check_referenced_ids(&self.ingredients, &self.tags, &ingredients, &tags).await?;
        let fields = RecipeUpdate {
            name: input.name,
            text: input.text,
            cooking_time: input.cooking_time,
            image: input.image,
        };
        self.recipes
            .replace(recipe_id, &fields, &ingredients, &tags)
            .await
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        caller_is_admin: bool,
        recipe_id: i32,
    ) -> Result<(), RecipesServiceError> {
        let recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        if recipe.author_id != caller_id && !caller_is_admin {
            return Err(RecipesServiceError::Forbidden);
        }
        self.recipes.delete(recipe_id).await?;
        Ok(())
    }
}

// ── View assembly ────────────────────────────────────────────────────────────

/// Repositories needed to turn bare recipes into full views: author profile
/// (with `is_subscribed`), tags, ingredients with amounts, and the two
/// viewer flags. Each flag is a pure function of (recipe, viewer); anonymous
/// viewers get `false` everywhere.
pub struct RecipeViews<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub recipes: R,
    pub users: U,
    pub favorites: F,
    pub carts: C,
    pub subscriptions: S,
}

impl<R, U, F, C, S> RecipeViews<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub async fn assemble(
        &self,
        recipes: Vec<Recipe>,
        viewer: Option<Uuid>,
    ) -> Result<Vec<RecipeDetail>, RecipesServiceError> {
        if recipes.is_empty() {
            return Ok(vec![]);
        }
        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();

        let mut ingredients_by_recipe: HashMap<i32, Vec<_>> = HashMap::new();
        for (recipe_id, ingredient) in self.recipes.ingredients_of(&recipe_ids).await? {
            ingredients_by_recipe
                .entry(recipe_id)
                .or_default()
                .push(ingredient);
        }
        let mut tags_by_recipe: HashMap<i32, Vec<_>> = HashMap::new();
        for (recipe_id, tag) in self.recipes.tags_of(&recipe_ids).await? {
            tags_by_recipe.entry(recipe_id).or_default().push(tag);
        }

        let author_ids: Vec<Uuid> = {
            let unique: HashSet<Uuid> = recipes.iter().map(|r| r.author_id).collect();
            unique.into_iter().collect()
        };
        let authors: HashMap<Uuid, _> = self
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let (favorited, in_cart, subscribed) = match viewer {
            Some(viewer_id) => (
                self.favorites
                    .filter_favorited(viewer_id, &recipe_ids)
                    .await?
                    .into_iter()
                    .collect::<HashSet<i32>>(),
                self.carts
                    .filter_in_cart(viewer_id, &recipe_ids)
                    .await?
                    .into_iter()
                    .collect::<HashSet<i32>>(),
                self.subscriptions
                    .filter_subscribed(viewer_id, &author_ids)
                    .await?
                    .into_iter()
                    .collect::<HashSet<Uuid>>(),
            ),
            None => (HashSet::new(), HashSet::new(), HashSet::new()),
        };

        let mut details = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            let author = authors
                .get(&recipe.author_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("author {} missing", recipe.author_id))?;
            details.push(RecipeDetail {
                is_favorited: favorited.contains(&recipe.id),
                is_in_shopping_cart: in_cart.contains(&recipe.id),
                author_subscribed: subscribed.contains(&author.id),
                tags: tags_by_recipe.remove(&recipe.id).unwrap_or_default(),
                ingredients: ingredients_by_recipe.remove(&recipe.id).unwrap_or_default(),
                author,
                recipe,
            });
        }
        Ok(details)
    }
}

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub views: RecipeViews<R, U, F, C, S>,
}

impl<R, U, F, C, S> ListRecipesUseCase<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub async fn execute(
        &self,
        viewer: Option<Uuid>,
        filter: RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<RecipeDetail>, RecipesServiceError> {
        // An anonymous caller who explicitly sets either membership flag
        // gets the empty set, whatever the flag's value.
        let viewer_id = match viewer {
            Some(id) => Some(id),
            None if filter.favorited.is_some() || filter.in_cart.is_some() => {
                return Ok(vec![]);
            }
            None => None,
        };
        let query = RecipeQuery {
            author: filter.author,
            tag_slugs: filter.tag_slugs,
            favorited_by: viewer_id.and_then(|id| filter.favorited.map(|f| (id, f))),
            in_cart_of: viewer_id.and_then(|id| filter.in_cart.map(|f| (id, f))),
        };
        let recipes = self.views.recipes.list(&query, page.clamped()).await?;
        self.views.assemble(recipes, viewer).await
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

pub struct GetRecipeUseCase<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub views: RecipeViews<R, U, F, C, S>,
}

impl<R, U, F, C, S> GetRecipeUseCase<R, U, F, C, S>
where
    R: RecipeRepository,
    U: UserRepository,
    F: FavoriteRepository,
    C: ShoppingCartRepository,
    S: SubscriptionRepository,
{
    pub async fn execute(
        &self,
        viewer: Option<Uuid>,
        recipe_id: i32,
    ) -> Result<RecipeDetail, RecipesServiceError> {
        let recipe = self
            .views
            .recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        let mut details = self.views.assemble(vec![recipe], viewer).await?;
        details
            .pop()
            .ok_or_else(|| anyhow::anyhow!("assembled view missing").into())
    }
}
