use uuid::Uuid;

use platter_recipes::domain::types::{IngredientSpec, RecipeInput};
use platter_recipes::error::RecipesServiceError;
use platter_recipes::usecase::recipe::{CreateRecipeUseCase, UpdateRecipeUseCase};

use crate::helpers::{Catalog, InMemoryStore};

fn catalog() -> Catalog {
    Catalog {
        ingredient_ids: vec![1, 2],
        tag_ids: vec![1, 2],
    }
}

fn submission(ingredients: Vec<IngredientSpec>, tags: Vec<i32>) -> RecipeInput {
    RecipeInput {
        name: "Borscht".to_owned(),
        text: "Beets first.".to_owned(),
        cooking_time: 90,
        image: None,
        ingredients: Some(ingredients),
        tags: Some(tags),
    }
}

#[tokio::test]
async fn should_fully_replace_associations_on_update() {
    let store = InMemoryStore::default();
    let author = Uuid::now_v7();

    let create = CreateRecipeUseCase {
        recipes: store.clone(),
        ingredients: catalog(),
        tags: catalog(),
    };
    let created = create
        .execute(
            author,
            submission(vec![IngredientSpec { id: 1, amount: 5 }], vec![1]),
        )
        .await
        .unwrap();

    let (ingredients, tags) = store.associations(created.id);
    assert_eq!(ingredients.len(), 1);
    assert_eq!(tags.len(), 1);

    let update = UpdateRecipeUseCase {
        recipes: store.clone(),
        ingredients: catalog(),
        tags: catalog(),
    };
    update
        .execute(
            author,
            false,
            created.id,
            submission(vec![IngredientSpec { id: 2, amount: 3 }], vec![2]),
        )
        .await
        .unwrap();

    // Exactly the new set, none of the old.
    let (ingredients, tags) = store.associations(created.id);
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].id, 2);
    assert_eq!(ingredients[0].amount, 3);
    assert!(!ingredients.iter().any(|s| s.id == 1));
    assert_eq!(tags, vec![2]);
}

#[tokio::test]
async fn should_leave_store_untouched_when_submission_has_duplicate_ingredient() {
    let store = InMemoryStore::default();
    let create = CreateRecipeUseCase {
        recipes: store.clone(),
        ingredients: catalog(),
        tags: catalog(),
    };
    let result = create
        .execute(
            Uuid::now_v7(),
            submission(
                vec![
                    IngredientSpec { id: 1, amount: 5 },
                    IngredientSpec { id: 1, amount: 7 },
                ],
                vec![1],
            ),
        )
        .await;

    assert!(matches!(
        result,
        Err(RecipesServiceError::DuplicateIngredient)
    ));
    assert_eq!(store.recipe_count(), 0);
}

#[tokio::test]
async fn should_reject_republishing_same_name_by_same_author() {
    let store = InMemoryStore::default();
    let author = Uuid::now_v7();
    let create = CreateRecipeUseCase {
        recipes: store.clone(),
        ingredients: catalog(),
        tags: catalog(),
    };
    create
        .execute(
            author,
            submission(vec![IngredientSpec { id: 1, amount: 5 }], vec![1]),
        )
        .await
        .unwrap();

    let result = create
        .execute(
            author,
            submission(vec![IngredientSpec { id: 2, amount: 3 }], vec![2]),
        )
        .await;
    assert!(matches!(result, Err(RecipesServiceError::AlreadyPublished)));
    assert_eq!(store.recipe_count(), 1);
}
