use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bounds on the amount of one ingredient within a recipe.
pub const MIN_AMOUNT: i32 = 1;
pub const MAX_AMOUNT: i32 = 32_000;

/// Bounds on a recipe's cooking time in minutes.
pub const MIN_COOKING_TIME: i32 = 1;
pub const MAX_COOKING_TIME: i32 = 719;

/// User profile. Credentials live in the auth gateway.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Recipe tag; `color` is a resolved CSS color name.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

/// Catalog ingredient.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

/// Recipe scalar fields. Associations are queried separately.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    pub author_id: Uuid,
    pub published_at: DateTime<Utc>,
}

/// An ingredient as it appears inside a recipe, with its amount.
#[derive(Debug, Clone)]
pub struct IngredientAmount {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// One (ingredient, amount) pair in a recipe submission.
#[derive(Debug, Clone, Copy)]
pub struct IngredientSpec {
    pub id: i32,
    pub amount: i32,
}

/// Typed recipe submission, validated once before any mutation.
/// `ingredients`/`tags` are `Option` so "field absent" and "field empty"
/// both surface as the same missing-field failure.
#[derive(Debug, Clone)]
pub struct RecipeInput {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    pub ingredients: Option<Vec<IngredientSpec>>,
    pub tags: Option<Vec<i32>>,
}

/// Recipe list predicates. All optional, AND-composed.
/// `favorited`/`in_cart` are evaluated against the requesting user.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author: Option<Uuid>,
    pub tag_slugs: Vec<String>,
    pub favorited: Option<bool>,
    pub in_cart: Option<bool>,
}

/// Storage-level recipe query: the filter with the viewer already bound
/// to the boolean predicates.
#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    pub author: Option<Uuid>,
    pub tag_slugs: Vec<String>,
    pub favorited_by: Option<(Uuid, bool)>,
    pub in_cart_of: Option<(Uuid, bool)>,
}

/// A recipe joined with everything its view needs.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub author: User,
    pub author_subscribed: bool,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<IngredientAmount>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// One RecipeIngredient row from the user's cart, pre-join, pre-aggregation.
#[derive(Debug, Clone)]
pub struct CartIngredientRow {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

/// A subscribed author together with the recipe data the view carries.
#[derive(Debug, Clone)]
pub struct SubscribedAuthor {
    pub author: User,
    pub recipes: Vec<Recipe>,
    pub recipes_count: u64,
}
