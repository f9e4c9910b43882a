use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use platter_domain::pagination::PageRequest;
use platter_recipes::domain::repository::{
    FavoriteRepository, IngredientRepository, NewRecipe, RecipeRepository, RecipeUpdate,
    ShoppingCartRepository, TagRepository,
};
use platter_recipes::domain::types::{
    CartIngredientRow, Ingredient, IngredientAmount, IngredientSpec, Recipe, RecipeQuery, Tag,
};
use platter_recipes::error::RecipesServiceError;

// ── InMemoryStore ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Inner {
    recipes: Vec<Recipe>,
    associations: HashMap<i32, (Vec<IngredientSpec>, Vec<i32>)>,
    favorites: Vec<(Uuid, i32)>,
    cart: Vec<(Uuid, i32)>,
}

/// Shared in-memory store standing in for the recipe, favorite, and cart
/// tables. Cloning yields a handle onto the same state, so several usecases
/// can mutate and observe one dataset.
#[derive(Clone, Default)]
pub struct InMemoryStore(Arc<Mutex<Inner>>);

impl InMemoryStore {
    pub fn recipe_count(&self) -> usize {
        self.0.lock().unwrap().recipes.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.0.lock().unwrap().favorites.len()
    }

    pub fn associations(&self, recipe_id: i32) -> (Vec<IngredientSpec>, Vec<i32>) {
        self.0
            .lock()
            .unwrap()
            .associations
            .get(&recipe_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl RecipeRepository for InMemoryStore {
    async fn list(
        &self,
        _query: &RecipeQuery,
        _page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        Ok(self.0.lock().unwrap().recipes.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecipesServiceError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn exists_by_name_and_author(
        &self,
        name: &str,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .recipes
            .iter()
            .any(|r| r.name == name && r.author_id == author_id))
    }

    async fn create(
        &self,
        recipe: &NewRecipe,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<Recipe, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        let id = inner.recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Recipe {
            id,
            name: recipe.name.clone(),
            text: recipe.text.clone(),
            cooking_time: recipe.cooking_time,
            image: recipe.image.clone(),
            author_id: recipe.author_id,
            published_at: Utc::now(),
        };
        inner.recipes.push(created.clone());
        inner
            .associations
            .insert(id, (ingredients.to_vec(), tag_ids.to_vec()));
        Ok(created)
    }

    async fn replace(
        &self,
        recipe_id: i32,
        fields: &RecipeUpdate,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<(), RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        let recipe = inner
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        recipe.name = fields.name.clone();
        recipe.text = fields.text.clone();
        recipe.cooking_time = fields.cooking_time;
        recipe.image = fields.image.clone();
        inner
            .associations
            .insert(recipe_id, (ingredients.to_vec(), tag_ids.to_vec()));
        Ok(())
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        let before = inner.recipes.len();
        inner.recipes.retain(|r| r.id != recipe_id);
        inner.associations.remove(&recipe_id);
        Ok(inner.recipes.len() < before)
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut recipes: Vec<Recipe> = self
            .0
            .lock()
            .unwrap()
            .recipes
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect();
        if let Some(limit) = limit {
            recipes.truncate(limit as usize);
        }
        Ok(recipes)
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .recipes
            .iter()
            .filter(|r| r.author_id == author_id)
            .count() as u64)
    }

    async fn ingredients_of(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(i32, IngredientAmount)>, RecipesServiceError> {
        let inner = self.0.lock().unwrap();
        let mut out = vec![];
        for recipe_id in recipe_ids {
            if let Some((specs, _)) = inner.associations.get(recipe_id) {
                for spec in specs {
                    out.push((
                        *recipe_id,
                        IngredientAmount {
                            id: spec.id,
                            name: format!("ingredient-{}", spec.id),
                            measurement_unit: "g".to_owned(),
                            amount: spec.amount,
                        },
                    ));
                }
            }
        }
        Ok(out)
    }

    async fn tags_of(&self, recipe_ids: &[i32]) -> Result<Vec<(i32, Tag)>, RecipesServiceError> {
        let inner = self.0.lock().unwrap();
        let mut out = vec![];
        for recipe_id in recipe_ids {
            if let Some((_, tags)) = inner.associations.get(recipe_id) {
                for tag_id in tags {
                    out.push((
                        *recipe_id,
                        Tag {
                            id: *tag_id,
                            name: format!("tag-{tag_id}"),
                            color: "green".to_owned(),
                            slug: format!("tag-{tag_id}"),
                        },
                    ));
                }
            }
        }
        Ok(out)
    }
}

impl FavoriteRepository for InMemoryStore {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        if inner.favorites.contains(&(user_id, recipe_id)) {
            return Ok(false);
        }
        inner.favorites.push((user_id, recipe_id));
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        let before = inner.favorites.len();
        inner.favorites.retain(|row| *row != (user_id, recipe_id));
        Ok(inner.favorites.len() < before)
    }

    async fn filter_favorited(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .favorites
            .iter()
            .filter(|(u, r)| *u == user_id && recipe_ids.contains(r))
            .map(|(_, r)| *r)
            .collect())
    }
}

impl ShoppingCartRepository for InMemoryStore {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        if inner.cart.contains(&(user_id, recipe_id)) {
            return Ok(false);
        }
        inner.cart.push((user_id, recipe_id));
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut inner = self.0.lock().unwrap();
        let before = inner.cart.len();
        inner.cart.retain(|row| *row != (user_id, recipe_id));
        Ok(inner.cart.len() < before)
    }

    async fn filter_in_cart(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .cart
            .iter()
            .filter(|(u, r)| *u == user_id && recipe_ids.contains(r))
            .map(|(_, r)| *r)
            .collect())
    }

    async fn cart_ingredient_rows(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CartIngredientRow>, RecipesServiceError> {
        let inner = self.0.lock().unwrap();
        let mut rows = vec![];
        for (user, recipe_id) in &inner.cart {
            if *user != user_id {
                continue;
            }
            if let Some((specs, _)) = inner.associations.get(recipe_id) {
                for spec in specs {
                    rows.push(CartIngredientRow {
                        name: format!("ingredient-{}", spec.id),
                        measurement_unit: "g".to_owned(),
                        amount: spec.amount,
                    });
                }
            }
        }
        Ok(rows)
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// Fixed ingredient/tag catalogs backing the existence checks.
#[derive(Clone)]
pub struct Catalog {
    pub ingredient_ids: Vec<i32>,
    pub tag_ids: Vec<i32>,
}

impl IngredientRepository for Catalog {
    async fn list(&self) -> Result<Vec<Ingredient>, RecipesServiceError> {
        Ok(vec![])
    }
    async fn find_by_id(&self, _id: i32) -> Result<Option<Ingredient>, RecipesServiceError> {
        Ok(None)
    }
    async fn search_prefix(&self, _query: &str) -> Result<Vec<Ingredient>, RecipesServiceError> {
        Ok(vec![])
    }
    async fn search_containing(
        &self,
        _query: &str,
    ) -> Result<Vec<Ingredient>, RecipesServiceError> {
        Ok(vec![])
    }
    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.ingredient_ids.contains(id))
            .collect())
    }
    async fn count(&self) -> Result<u64, RecipesServiceError> {
        Ok(self.ingredient_ids.len() as u64)
    }
    async fn bulk_insert(&self, rows: &[(String, String)]) -> Result<u64, RecipesServiceError> {
        Ok(rows.len() as u64)
    }
}

impl TagRepository for Catalog {
    async fn list(&self) -> Result<Vec<Tag>, RecipesServiceError> {
        Ok(vec![])
    }
    async fn find_by_id(&self, _id: i32) -> Result<Option<Tag>, RecipesServiceError> {
        Ok(None)
    }
    async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.tag_ids.contains(id))
            .collect())
    }
    async fn slug_exists(&self, _slug: &str) -> Result<bool, RecipesServiceError> {
        Ok(false)
    }
    async fn create(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<Tag, RecipesServiceError> {
        Ok(Tag {
            id: 1,
            name: name.to_owned(),
            color: color.to_owned(),
            slug: slug.to_owned(),
        })
    }
}
