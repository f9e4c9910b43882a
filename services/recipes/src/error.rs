use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recipes service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecipesServiceError {
    #[error("recipe not found")]
    RecipeNotFound,
    #[error("ingredient not found")]
    IngredientNotFound,
    #[error("tag not found")]
    TagNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("ingredients are required")]
    MissingIngredients,
    #[error("tags are required")]
    MissingTags,
    #[error("duplicate ingredient in submission")]
    DuplicateIngredient,
    #[error("duplicate tag in submission")]
    DuplicateTag,
    #[error("ingredient amount out of bounds")]
    InvalidAmount,
    #[error("cooking time out of bounds")]
    InvalidCookingTime,
    #[error("color does not resolve to a known name")]
    InvalidColor,
    #[error("invalid query parameters")]
    InvalidQuery,
    #[error("recipe with this name already published by this author")]
    AlreadyPublished,
    #[error("tag slug already exists")]
    TagAlreadyExists,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("cannot subscribe to yourself")]
    SelfSubscription,
    #[error("shopping cart is empty")]
    EmptyShoppingCart,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecipesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::IngredientNotFound => "INGREDIENT_NOT_FOUND",
            Self::TagNotFound => "TAG_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MissingIngredients => "MISSING_INGREDIENTS",
            Self::MissingTags => "MISSING_TAGS",
            Self::DuplicateIngredient => "DUPLICATE_INGREDIENT",
            Self::DuplicateTag => "DUPLICATE_TAG",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidCookingTime => "INVALID_COOKING_TIME",
            Self::InvalidColor => "INVALID_COLOR",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::AlreadyPublished => "ALREADY_PUBLISHED",
            Self::TagAlreadyExists => "TAG_ALREADY_EXISTS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::SelfSubscription => "SELF_SUBSCRIPTION",
            Self::EmptyShoppingCart => "EMPTY_SHOPPING_CART",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RecipesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RecipeNotFound
            | Self::IngredientNotFound
            | Self::TagNotFound
            | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::MissingIngredients
            | Self::MissingTags
            | Self::DuplicateIngredient
            | Self::DuplicateTag
            | Self::InvalidAmount
            | Self::InvalidCookingTime
            | Self::InvalidColor
            | Self::InvalidQuery
            | Self::SelfSubscription
            | Self::EmptyShoppingCart => StatusCode::BAD_REQUEST,
            Self::AlreadyPublished | Self::TagAlreadyExists | Self::UserAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
