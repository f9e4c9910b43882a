//! In-memory repository doubles shared by the usecase tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::repository::{
    FavoriteRepository, IngredientRepository, NewRecipe, RecipeRepository, RecipeUpdate,
    ShoppingCartRepository, SubscriptionRepository, TagRepository, UserRepository,
};
use crate::domain::types::{
    CartIngredientRow, Ingredient, IngredientAmount, IngredientSpec, Recipe, RecipeQuery, Tag,
    User,
};
use crate::error::RecipesServiceError;

pub fn user(id: Uuid) -> User {
    User {
        id,
        email: format!("{id}@example.com"),
        username: format!("user-{id}"),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        created_at: Utc::now(),
    }
}

pub fn recipe(id: i32, author_id: Uuid, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        text: "stir well".to_owned(),
        cooking_time: 30,
        image: None,
        author_id,
        published_at: Utc::now(),
    }
}

// ── Recipes ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockRecipeRepo {
    recipes: Mutex<Vec<Recipe>>,
    associations: Mutex<HashMap<i32, (Vec<IngredientSpec>, Vec<i32>)>>,
    created: Mutex<usize>,
}

impl MockRecipeRepo {
    pub fn push(&mut self, recipe: Recipe) {
        self.recipes.get_mut().unwrap().push(recipe);
    }

    pub fn set_associations(&mut self, recipe_id: i32, specs: Vec<IngredientSpec>, tags: Vec<i32>) {
        self.associations
            .get_mut()
            .unwrap()
            .insert(recipe_id, (specs, tags));
    }

    pub fn associations(&self, recipe_id: i32) -> (Vec<IngredientSpec>, Vec<i32>) {
        self.associations
            .lock()
            .unwrap()
            .get(&recipe_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn created_count(&self) -> usize {
        *self.created.lock().unwrap()
    }
}

impl RecipeRepository for MockRecipeRepo {
    async fn list(
        &self,
        query: &RecipeQuery,
        _page: PageRequest,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut out: Vec<Recipe> = self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| query.author.is_none_or(|a| r.author_id == a))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(out)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, RecipesServiceError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
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
            .recipes
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.name == name && r.author_id == author_id))
    }

    async fn create(
        &self,
        recipe: &NewRecipe,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<Recipe, RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Recipe {
            id,
            name: recipe.name.clone(),
            text: recipe.text.clone(),
            cooking_time: recipe.cooking_time,
            image: recipe.image.clone(),
            author_id: recipe.author_id,
            published_at: Utc::now(),
        };
        recipes.push(created.clone());
        self.associations
            .lock()
            .unwrap()
            .insert(id, (ingredients.to_vec(), tag_ids.to_vec()));
        *self.created.lock().unwrap() += 1;
        Ok(created)
    }

    async fn replace(
        &self,
        recipe_id: i32,
        fields: &RecipeUpdate,
        ingredients: &[IngredientSpec],
        tag_ids: &[i32],
    ) -> Result<(), RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or(RecipesServiceError::RecipeNotFound)?;
        recipe.name = fields.name.clone();
        recipe.text = fields.text.clone();
        recipe.cooking_time = fields.cooking_time;
        recipe.image = fields.image.clone();
        self.associations
            .lock()
            .unwrap()
            .insert(recipe_id, (ingredients.to_vec(), tag_ids.to_vec()));
        Ok(())
    }

    async fn delete(&self, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        self.associations.lock().unwrap().remove(&recipe_id);
        Ok(recipes.len() < before)
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut out: Vec<Recipe> = self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        if let Some(limit) = limit {
            out.truncate(limit as usize);
        }
        Ok(out)
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<u64, RecipesServiceError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.author_id == author_id)
            .count() as u64)
    }

    async fn ingredients_of(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(i32, IngredientAmount)>, RecipesServiceError> {
        let associations = self.associations.lock().unwrap();
        let mut out = vec![];
        for recipe_id in recipe_ids {
            if let Some((specs, _)) = associations.get(recipe_id) {
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
        let associations = self.associations.lock().unwrap();
        let mut out = vec![];
        for recipe_id in recipe_ids {
            if let Some((_, tags)) = associations.get(recipe_id) {
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

// ── Users ────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Mutex<Vec<User>>,
    pub taken: bool,
}

impl MockUserRepo {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            taken: false,
        }
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipesServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RecipesServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RecipesServiceError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.id == id))
    }

    async fn email_or_username_taken(
        &self,
        _email: &str,
        _username: &str,
    ) -> Result<bool, RecipesServiceError> {
        Ok(self.taken)
    }

    async fn create(&self, user: &User) -> Result<(), RecipesServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

// ── Ingredient / tag catalogs (existence checks only) ────────────────────────

pub struct MockIngredientCatalog {
    ids: Vec<i32>,
}

impl MockIngredientCatalog {
    pub fn with_ids(ids: &[i32]) -> Self {
        Self { ids: ids.to_vec() }
    }
}

impl IngredientRepository for MockIngredientCatalog {
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
            .filter(|id| self.ids.contains(id))
            .collect())
    }
    async fn count(&self) -> Result<u64, RecipesServiceError> {
        Ok(self.ids.len() as u64)
    }
    async fn bulk_insert(&self, rows: &[(String, String)]) -> Result<u64, RecipesServiceError> {
        Ok(rows.len() as u64)
    }
}

pub struct MockTagCatalog {
    ids: Vec<i32>,
}

impl MockTagCatalog {
    pub fn with_ids(ids: &[i32]) -> Self {
        Self { ids: ids.to_vec() }
    }
}

impl TagRepository for MockTagCatalog {
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
            .filter(|id| self.ids.contains(id))
            .collect())
    }
    async fn slug_exists(&self, _slug: &str) -> Result<bool, RecipesServiceError> {
        Ok(false)
    }
    async fn create(&self, name: &str, color: &str, slug: &str) -> Result<Tag, RecipesServiceError> {
        Ok(Tag {
            id: 1,
            name: name.to_owned(),
            color: color.to_owned(),
            slug: slug.to_owned(),
        })
    }
}

// ── Favorites ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockFavoriteRepo {
    rows: Mutex<Vec<(Uuid, i32)>>,
}

impl MockFavoriteRepo {
    pub fn with_rows(rows: Vec<(Uuid, i32)>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn contains(&self, user_id: Uuid, recipe_id: i32) -> bool {
        self.rows.lock().unwrap().contains(&(user_id, recipe_id))
    }
}

impl FavoriteRepository for MockFavoriteRepo {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains(&(user_id, recipe_id)) {
            return Ok(false);
        }
        rows.push((user_id, recipe_id));
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| *row != (user_id, recipe_id));
        Ok(rows.len() < before)
    }

    async fn filter_favorited(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, r)| *u == user_id && recipe_ids.contains(r))
            .map(|(_, r)| *r)
            .collect())
    }
}

// ── Shopping cart ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockShoppingCartRepo {
    rows: Mutex<Vec<(Uuid, i32)>>,
    ingredient_rows: Vec<CartIngredientRow>,
}

impl MockShoppingCartRepo {
    pub fn with_rows(rows: Vec<(Uuid, i32)>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ingredient_rows: vec![],
        }
    }

    pub fn with_ingredient_rows(rows: Vec<CartIngredientRow>) -> Self {
        Self {
            rows: Mutex::new(vec![]),
            ingredient_rows: rows,
        }
    }

    pub fn contains(&self, user_id: Uuid, recipe_id: i32) -> bool {
        self.rows.lock().unwrap().contains(&(user_id, recipe_id))
    }
}

impl ShoppingCartRepository for MockShoppingCartRepo {
    async fn insert_if_absent(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains(&(user_id, recipe_id)) {
            return Ok(false);
        }
        rows.push((user_id, recipe_id));
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, recipe_id: i32) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| *row != (user_id, recipe_id));
        Ok(rows.len() < before)
    }

    async fn filter_in_cart(
        &self,
        user_id: Uuid,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, RecipesServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, r)| *u == user_id && recipe_ids.contains(r))
            .map(|(_, r)| *r)
            .collect())
    }

    async fn cart_ingredient_rows(
        &self,
        _user_id: Uuid,
    ) -> Result<Vec<CartIngredientRow>, RecipesServiceError> {
        Ok(self.ingredient_rows.clone())
    }
}

// ── Subscriptions ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSubscriptionRepo {
    rows: Mutex<Vec<(Uuid, Uuid)>>,
}

impl MockSubscriptionRepo {
    pub fn with_rows(rows: Vec<(Uuid, Uuid)>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn contains(&self, subscriber_id: Uuid, author_id: Uuid) -> bool {
        self.rows
            .lock()
            .unwrap()
            .contains(&(subscriber_id, author_id))
    }
}

impl SubscriptionRepository for MockSubscriptionRepo {
    async fn insert_if_absent(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains(&(subscriber_id, author_id)) {
            return Ok(false);
        }
        rows.push((subscriber_id, author_id));
        Ok(true)
    }

    async fn delete(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RecipesServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| *row != (subscriber_id, author_id));
        Ok(rows.len() < before)
    }

    async fn list_authors(
        &self,
        subscriber_id: Uuid,
        _page: PageRequest,
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        let mut authors: Vec<Uuid> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == subscriber_id)
            .map(|(_, a)| *a)
            .collect();
        // Newest subscription first.
        authors.reverse();
        Ok(authors)
    }

    async fn filter_subscribed(
        &self,
        subscriber_id: Uuid,
        author_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, RecipesServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, a)| *s == subscriber_id && author_ids.contains(a))
            .map(|(_, a)| *a)
            .collect())
    }
}
