use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use platter_core::health::{healthz, readyz};
use platter_core::middleware::request_id_layer;

use crate::handlers::{
    ingredient::{get_ingredient, get_ingredients},
    recipe::{
        add_favorite, add_to_shopping_cart, create_recipe, delete_recipe,
        download_shopping_list, get_recipe, get_recipes, remove_favorite,
        remove_from_shopping_cart, update_recipe,
    },
    subscription::{get_subscriptions, subscribe, unsubscribe},
    tag::{create_tag, get_tag, get_tags},
    user::{create_user, get_me, get_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Ingredients
        .route("/ingredients", get(get_ingredients))
        .route("/ingredients/{id}", get(get_ingredient))
        // Tags
        .route("/tags", get(get_tags))
        .route("/tags", post(create_tag))
        .route("/tags/{id}", get(get_tag))
        // Recipes
        .route("/recipes", get(get_recipes))
        .route("/recipes", post(create_recipe))
        .route("/recipes/shopping-cart/download", get(download_shopping_list))
        .route("/recipes/{id}", get(get_recipe))
        .route("/recipes/{id}", patch(update_recipe))
        .route("/recipes/{id}", delete(delete_recipe))
        .route("/recipes/{id}/favorite", post(add_favorite))
        .route("/recipes/{id}/favorite", delete(remove_favorite))
        .route("/recipes/{id}/shopping-cart", post(add_to_shopping_cart))
        .route(
            "/recipes/{id}/shopping-cart",
            delete(remove_from_shopping_cart),
        )
        // Users and subscriptions
        .route("/users", post(create_user))
        .route("/users/@me", get(get_me))
        .route("/users/@me/subscriptions", get(get_subscriptions))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/subscribe", post(subscribe))
        .route("/users/{id}/subscribe", delete(unsubscribe))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
