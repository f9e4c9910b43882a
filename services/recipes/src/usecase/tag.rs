use platter_domain::color;

use crate::domain::repository::TagRepository;
use crate::domain::types::Tag;
use crate::error::RecipesServiceError;

// ── ListTags ─────────────────────────────────────────────────────────────────

pub struct ListTagsUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> ListTagsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Tag>, RecipesServiceError> {
        self.repo.list().await
    }
}

// ── GetTag ───────────────────────────────────────────────────────────────────

pub struct GetTagUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> GetTagUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Tag, RecipesServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RecipesServiceError::TagNotFound)
    }
}

// ── CreateTag ────────────────────────────────────────────────────────────────

pub struct CreateTagInput {
    pub name: String,
    /// Hex color string; stored as the resolved CSS name.
    pub color: String,
    pub slug: String,
}

pub struct CreateTagUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> CreateTagUseCase<R> {
    pub async fn execute(&self, input: CreateTagInput) -> Result<Tag, RecipesServiceError> {
        let color_name =
            color::hex_to_name(&input.color).ok_or(RecipesServiceError::InvalidColor)?;
        if self.repo.slug_exists(&input.slug).await? {
            return Err(RecipesServiceError::TagAlreadyExists);
        }
        self.repo.create(&input.name, color_name, &input.slug).await
    }
}
