use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Ingredient;
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::ingredient::{GetIngredientUseCase, SearchIngredientsUseCase};

#[derive(Serialize)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct IngredientSearchQuery {
    pub name: Option<String>,
}

// ── GET /ingredients ─────────────────────────────────────────────────────────

pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientSearchQuery>,
) -> Result<Json<Vec<IngredientResponse>>, RecipesServiceError> {
    let usecase = SearchIngredientsUseCase {
        repo: state.ingredient_repo(),
    };
    let ingredients = usecase.execute(query.name.as_deref().unwrap_or("")).await?;
    Ok(Json(
        ingredients.into_iter().map(IngredientResponse::from).collect(),
    ))
}

// ── GET /ingredients/{id} ────────────────────────────────────────────────────

pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<IngredientResponse>, RecipesServiceError> {
    let usecase = GetIngredientUseCase {
        repo: state.ingredient_repo(),
    };
    let ingredient = usecase.execute(id).await?;
    Ok(Json(ingredient.into()))
}
