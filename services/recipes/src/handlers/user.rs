use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_auth_types::identity::{Identity, Viewer};

use crate::domain::types::User;
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, GetUserUseCase};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    #[serde(serialize_with = "platter_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

fn user_response(user: User, is_subscribed: bool) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        is_subscribed,
        created_at: user.created_at,
    }
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, RecipesServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        subscriptions: state.subscription_repo(),
    };
    let (user, subscribed) = usecase.execute(viewer.user_id(), id).await?;
    Ok(Json(user_response(user, subscribed)))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, RecipesServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        subscriptions: state.subscription_repo(),
    };
    let (user, _) = usecase.execute(None, identity.user_id).await?;
    Ok(Json(user_response(user, false)))
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn create_user(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), RecipesServiceError> {
    if !identity.is_admin() {
        return Err(RecipesServiceError::Forbidden);
    }
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            email: body.email,
            username: body.username,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user_response(user, false))))
}
