use std::collections::HashSet;

use crate::domain::repository::IngredientRepository;
use crate::domain::types::Ingredient;
use crate::error::RecipesServiceError;

// ── SearchIngredients ────────────────────────────────────────────────────────

/// Ranked ingredient name search: names starting with the query come first,
/// then names merely containing it, each bucket alphabetical. An empty query
/// returns the whole catalog in default order.
pub struct SearchIngredientsUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> SearchIngredientsUseCase<R> {
    pub async fn execute(&self, query: &str) -> Result<Vec<Ingredient>, RecipesServiceError> {
        if query.is_empty() {
            return self.repo.list().await;
        }
        let mut results = self.repo.search_prefix(query).await?;
        let prefix_ids: HashSet<i32> = results.iter().map(|i| i.id).collect();
        let containing = self.repo.search_containing(query).await?;
        results.extend(
            containing
                .into_iter()
                .filter(|i| !prefix_ids.contains(&i.id)),
        );
        Ok(results)
    }
}

// ── GetIngredient ────────────────────────────────────────────────────────────

pub struct GetIngredientUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> GetIngredientUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Ingredient, RecipesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RecipesServiceError::IngredientNotFound)
    }
}

// ── LoadIngredients (catalog import) ─────────────────────────────────────────

/// One-time CSV catalog import. Refuses to run when the catalog already
/// holds data, so a re-run cannot duplicate rows.
pub struct LoadIngredientsUseCase<R: IngredientRepository> {
    pub repo: R,
}

pub enum LoadOutcome {
    Loaded(u64),
    AlreadyLoaded,
}

impl<R: IngredientRepository> LoadIngredientsUseCase<R> {
    pub async fn execute(
        &self,
        rows: &[(String, String)],
    ) -> Result<LoadOutcome, RecipesServiceError> {
        if self.repo.count().await? > 0 {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        let written = self.repo.bulk_insert(rows).await?;
        Ok(LoadOutcome::Loaded(written))
    }
}
