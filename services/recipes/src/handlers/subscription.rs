use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_auth_types::identity::Identity;
use platter_domain::pagination::PageRequest;

use crate::domain::types::SubscribedAuthor;
use crate::error::RecipesServiceError;
use crate::handlers::recipe::CompactRecipeResponse;
use crate::state::AppState;
use crate::usecase::ToggleOutcome;
use crate::usecase::subscription::{
    ListSubscriptionsUseCase, SubscribeUseCase, UnsubscribeUseCase,
};

#[derive(Serialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<CompactRecipeResponse>,
    pub recipes_count: u64,
}

impl From<SubscribedAuthor> for SubscriptionResponse {
    fn from(view: SubscribedAuthor) -> Self {
        Self {
            id: view.author.id.to_string(),
            email: view.author.email,
            username: view.author.username,
            first_name: view.author.first_name,
            last_name: view.author.last_name,
            is_subscribed: true,
            recipes: view
                .recipes
                .into_iter()
                .map(CompactRecipeResponse::from)
                .collect(),
            recipes_count: view.recipes_count,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SubscriptionListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub recipes_limit: Option<u64>,
}

fn parse_query(raw_query: Option<&str>) -> Result<SubscriptionListQuery, RecipesServiceError> {
    Ok(raw_query
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| RecipesServiceError::InvalidQuery)?
        .unwrap_or_default())
}

// ── GET /users/@me/subscriptions ─────────────────────────────────────────────

pub async fn get_subscriptions(
    identity: Identity,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<SubscriptionResponse>>, RecipesServiceError> {
    let query = parse_query(raw_query.as_deref())?;
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };
    let usecase = ListSubscriptionsUseCase {
        subscriptions: state.subscription_repo(),
        users: state.user_repo(),
        recipes: state.recipe_repo(),
    };
    let authors = usecase
        .execute(identity.user_id, page, query.recipes_limit)
        .await?;
    Ok(Json(
        authors.into_iter().map(SubscriptionResponse::from).collect(),
    ))
}

// ── POST /users/{id}/subscribe ───────────────────────────────────────────────

#[derive(Serialize)]
struct DetailResponse {
    detail: &'static str,
}

pub async fn subscribe(
    identity: Identity,
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, RecipesServiceError> {
    let query = parse_query(raw_query.as_deref())?;
    let usecase = SubscribeUseCase {
        subscriptions: state.subscription_repo(),
        users: state.user_repo(),
        recipes: state.recipe_repo(),
    };
    let outcome = usecase
        .execute(identity.user_id, author_id, query.recipes_limit)
        .await?;
    Ok(match outcome {
        ToggleOutcome::Created(view) => (
            StatusCode::CREATED,
            Json(SubscriptionResponse::from(view)),
        )
            .into_response(),
        ToggleOutcome::AlreadyExists => (
            StatusCode::OK,
            Json(DetailResponse {
                detail: "already exists",
            }),
        )
            .into_response(),
    })
}

// ── DELETE /users/{id}/subscribe ─────────────────────────────────────────────

pub async fn unsubscribe(
    identity: Identity,
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<StatusCode, RecipesServiceError> {
    let usecase = UnsubscribeUseCase {
        subscriptions: state.subscription_repo(),
    };
    usecase.execute(identity.user_id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
