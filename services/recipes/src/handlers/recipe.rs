use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_auth_types::identity::{Identity, Viewer};
use platter_domain::pagination::PageRequest;

use crate::domain::types::{IngredientSpec, Recipe, RecipeDetail, RecipeFilter, RecipeInput};
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::ToggleOutcome;
use crate::usecase::favorite::{AddFavoriteUseCase, RemoveFavoriteUseCase};
use crate::usecase::recipe::{
    CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeUseCase,
};
use crate::usecase::shopping_cart::{AddToShoppingCartUseCase, RemoveFromShoppingCartUseCase};
use crate::usecase::shopping_list::BuildShoppingListUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

#[derive(Serialize)]
pub struct RecipeIngredientResponse {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Serialize)]
pub struct RecipeTagResponse {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

#[derive(Serialize)]
pub struct RecipeResponse {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    #[serde(serialize_with = "platter_core::serde::to_rfc3339_ms")]
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub author: AuthorResponse,
    pub tags: Vec<RecipeTagResponse>,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl From<RecipeDetail> for RecipeResponse {
    fn from(detail: RecipeDetail) -> Self {
        Self {
            id: detail.recipe.id,
            name: detail.recipe.name,
            text: detail.recipe.text,
            cooking_time: detail.recipe.cooking_time,
            image: detail.recipe.image,
            published_at: detail.recipe.published_at,
            author: AuthorResponse {
                id: detail.author.id.to_string(),
                email: detail.author.email,
                username: detail.author.username,
                first_name: detail.author.first_name,
                last_name: detail.author.last_name,
                is_subscribed: detail.author_subscribed,
            },
            tags: detail
                .tags
                .into_iter()
                .map(|t| RecipeTagResponse {
                    id: t.id,
                    name: t.name,
                    color: t.color,
                    slug: t.slug,
                })
                .collect(),
            ingredients: detail
                .ingredients
                .into_iter()
                .map(|i| RecipeIngredientResponse {
                    id: i.id,
                    name: i.name,
                    measurement_unit: i.measurement_unit,
                    amount: i.amount,
                })
                .collect(),
            is_favorited: detail.is_favorited,
            is_in_shopping_cart: detail.is_in_shopping_cart,
        }
    }
}

/// Minimal recipe representation used by toggle and subscription views.
#[derive(Serialize)]
pub struct CompactRecipeResponse {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

impl From<Recipe> for CompactRecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        }
    }
}

#[derive(Serialize)]
struct DetailResponse {
    detail: &'static str,
}

fn toggle_response(outcome: ToggleOutcome<Recipe>) -> Response {
    match outcome {
        ToggleOutcome::Created(recipe) => (
            StatusCode::CREATED,
            Json(CompactRecipeResponse::from(recipe)),
        )
            .into_response(),
        ToggleOutcome::AlreadyExists => (
            StatusCode::OK,
            Json(DetailResponse {
                detail: "already exists",
            }),
        )
            .into_response(),
    }
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecipeIngredientBody {
    pub id: i32,
    pub amount: i32,
}

#[derive(Deserialize)]
pub struct RecipeBody {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    pub ingredients: Option<Vec<RecipeIngredientBody>>,
    pub tags: Option<Vec<i32>>,
}

impl From<RecipeBody> for RecipeInput {
    fn from(body: RecipeBody) -> Self {
        RecipeInput {
            name: body.name,
            text: body.text,
            cooking_time: body.cooking_time,
            image: body.image,
            ingredients: body.ingredients.map(|specs| {
                specs
                    .into_iter()
                    .map(|s| IngredientSpec {
                        id: s.id,
                        amount: s.amount,
                    })
                    .collect()
            }),
            tags: body.tags,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RecipeListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub author: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

// ── GET /recipes ─────────────────────────────────────────────────────────────

pub async fn get_recipes(
    viewer: Viewer,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<RecipeResponse>>, RecipesServiceError> {
    let query: RecipeListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| RecipesServiceError::InvalidQuery)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let filter = RecipeFilter {
        author: query.author,
        tag_slugs: query.tags,
        favorited: query.is_favorited,
        in_cart: query.is_in_shopping_cart,
    };

    let usecase = ListRecipesUseCase {
        views: state.recipe_views(),
    };
    let details = usecase.execute(viewer.user_id(), filter, page).await?;
    Ok(Json(details.into_iter().map(RecipeResponse::from).collect()))
}

// ── GET /recipes/{id} ────────────────────────────────────────────────────────

pub async fn get_recipe(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RecipeResponse>, RecipesServiceError> {
    let usecase = GetRecipeUseCase {
        views: state.recipe_views(),
    };
    let detail = usecase.execute(viewer.user_id(), id).await?;
    Ok(Json(detail.into()))
}

// ── POST /recipes ────────────────────────────────────────────────────────────

pub async fn create_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<RecipeBody>,
) -> Result<(StatusCode, Json<RecipeResponse>), RecipesServiceError> {
    let usecase = CreateRecipeUseCase {
        recipes: state.recipe_repo(),
        ingredients: state.ingredient_repo(),
        tags: state.tag_repo(),
    };
    let created = usecase.execute(identity.user_id, body.into()).await?;

    let view = GetRecipeUseCase {
        views: state.recipe_views(),
    };
    let detail = view.execute(Some(identity.user_id), created.id).await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

// ── PATCH /recipes/{id} ──────────────────────────────────────────────────────

pub async fn update_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<RecipeBody>,
) -> Result<Json<RecipeResponse>, RecipesServiceError> {
    let usecase = UpdateRecipeUseCase {
        recipes: state.recipe_repo(),
        ingredients: state.ingredient_repo(),
        tags: state.tag_repo(),
    };
    usecase
        .execute(identity.user_id, identity.is_admin(), id, body.into())
        .await?;

    let view = GetRecipeUseCase {
        views: state.recipe_views(),
    };
    let detail = view.execute(Some(identity.user_id), id).await?;
    Ok(Json(detail.into()))
}

// ── DELETE /recipes/{id} ─────────────────────────────────────────────────────

pub async fn delete_recipe(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    let usecase = DeleteRecipeUseCase {
        recipes: state.recipe_repo(),
    };
    usecase
        .execute(identity.user_id, identity.is_admin(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /recipes/{id}/favorite ──────────────────────────────────────────────

pub async fn add_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, RecipesServiceError> {
    let usecase = AddFavoriteUseCase {
        recipes: state.recipe_repo(),
        favorites: state.favorite_repo(),
    };
    let outcome = usecase.execute(identity.user_id, id).await?;
    Ok(toggle_response(outcome))
}

// ── DELETE /recipes/{id}/favorite ────────────────────────────────────────────

pub async fn remove_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    let usecase = RemoveFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /recipes/{id}/shopping-cart ─────────────────────────────────────────

pub async fn add_to_shopping_cart(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, RecipesServiceError> {
    let usecase = AddToShoppingCartUseCase {
        recipes: state.recipe_repo(),
        carts: state.shopping_cart_repo(),
    };
    let outcome = usecase.execute(identity.user_id, id).await?;
    Ok(toggle_response(outcome))
}

// ── DELETE /recipes/{id}/shopping-cart ───────────────────────────────────────

pub async fn remove_from_shopping_cart(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, RecipesServiceError> {
    let usecase = RemoveFromShoppingCartUseCase {
        carts: state.shopping_cart_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /recipes/shopping-cart/download ──────────────────────────────────────

pub async fn download_shopping_list(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Response, RecipesServiceError> {
    let usecase = BuildShoppingListUseCase {
        carts: state.shopping_cart_repo(),
    };
    let list = usecase
        .execute(identity.user_id, Utc::now().date_naive())
        .await?;
    let disposition = format!("attachment; filename=\"{}\"", list.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        list.body,
    )
        .into_response())
}
