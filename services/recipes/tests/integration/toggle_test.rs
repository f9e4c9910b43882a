use chrono::NaiveDate;
use uuid::Uuid;

use platter_recipes::domain::types::{IngredientSpec, RecipeInput};
use platter_recipes::usecase::ToggleOutcome;
use platter_recipes::usecase::favorite::AddFavoriteUseCase;
use platter_recipes::usecase::recipe::CreateRecipeUseCase;
use platter_recipes::usecase::shopping_cart::AddToShoppingCartUseCase;
use platter_recipes::usecase::shopping_list::BuildShoppingListUseCase;

use crate::helpers::{Catalog, InMemoryStore};

fn catalog() -> Catalog {
    Catalog {
        ingredient_ids: vec![1, 2],
        tag_ids: vec![1],
    }
}

async fn publish(store: &InMemoryStore, name: &str, ingredients: Vec<IngredientSpec>) -> i32 {
    let create = CreateRecipeUseCase {
        recipes: store.clone(),
        ingredients: catalog(),
        tags: catalog(),
    };
    create
        .execute(
            Uuid::now_v7(),
            RecipeInput {
                name: name.to_owned(),
                text: "stir well".to_owned(),
                cooking_time: 20,
                image: None,
                ingredients: Some(ingredients),
                tags: Some(vec![1]),
            },
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn should_keep_single_row_when_favoriting_twice() {
    let store = InMemoryStore::default();
    let recipe_id = publish(&store, "Borscht", vec![IngredientSpec { id: 1, amount: 5 }]).await;
    let user_id = Uuid::now_v7();

    let add = AddFavoriteUseCase {
        recipes: store.clone(),
        favorites: store.clone(),
    };
    let first = add.execute(user_id, recipe_id).await.unwrap();
    let second = add.execute(user_id, recipe_id).await.unwrap();

    assert!(matches!(first, ToggleOutcome::Created(_)));
    assert!(matches!(second, ToggleOutcome::AlreadyExists));
    assert_eq!(store.favorite_count(), 1);
}

#[tokio::test]
async fn should_sum_shared_ingredient_across_cart_recipes() {
    let store = InMemoryStore::default();
    let first = publish(&store, "Borscht", vec![IngredientSpec { id: 1, amount: 5 }]).await;
    let second = publish(
        &store,
        "Pelmeni",
        vec![IngredientSpec { id: 1, amount: 10 }],
    )
    .await;
    let user_id = Uuid::now_v7();

    let add = AddToShoppingCartUseCase {
        recipes: store.clone(),
        carts: store.clone(),
    };
    add.execute(user_id, first).await.unwrap();
    add.execute(user_id, second).await.unwrap();

    let build = BuildShoppingListUseCase {
        carts: store.clone(),
    };
    let list = build
        .execute(user_id, NaiveDate::from_ymd_opt(2026, 5, 10).unwrap())
        .await
        .unwrap();

    assert!(list.body.contains("ingredient-1:  15 g\n"));
    assert_eq!(list.body.matches("ingredient-1").count(), 1);
}
