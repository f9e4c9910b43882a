use std::collections::HashMap;

use uuid::Uuid;

use platter_domain::pagination::PageRequest;

use crate::domain::repository::{RecipeRepository, SubscriptionRepository, UserRepository};
use crate::domain::types::SubscribedAuthor;
use crate::error::RecipesServiceError;
use crate::usecase::ToggleOutcome;

// ── Subscribe ────────────────────────────────────────────────────────────────

pub struct SubscribeUseCase<S, U, R>
where
    S: SubscriptionRepository,
    U: UserRepository,
    R: RecipeRepository,
{
    pub subscriptions: S,
    pub users: U,
    pub recipes: R,
}

impl<S, U, R> SubscribeUseCase<S, U, R>
where
    S: SubscriptionRepository,
    U: UserRepository,
    R: RecipeRepository,
{
    /// Self-subscription is rejected before any lookup, so it fails the same
    /// way whether or not the caller exists as an author.
    pub async fn execute(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
        recipes_limit: Option<u64>,
    ) -> Result<ToggleOutcome<SubscribedAuthor>, RecipesServiceError> {
        if subscriber_id == author_id {
            return Err(RecipesServiceError::SelfSubscription);
        }
        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or(RecipesServiceError::UserNotFound)?;
        if !self
            .subscriptions
            .insert_if_absent(subscriber_id, author_id)
            .await?
        {
            return Ok(ToggleOutcome::AlreadyExists);
        }
        let recipes = self.recipes.list_by_author(author_id, recipes_limit).await?;
        let recipes_count = self.recipes.count_by_author(author_id).await?;
        Ok(ToggleOutcome::Created(SubscribedAuthor {
            author,
            recipes,
            recipes_count,
        }))
    }
}

// ── Unsubscribe ──────────────────────────────────────────────────────────────

pub struct UnsubscribeUseCase<S: SubscriptionRepository> {
    pub subscriptions: S,
}

impl<S: SubscriptionRepository> UnsubscribeUseCase<S> {
    /// Removing an absent subscription is a no-op success.
    pub async fn execute(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<(), RecipesServiceError> {
        self.subscriptions.delete(subscriber_id, author_id).await?;
        Ok(())
    }
}

// ── ListSubscriptions ────────────────────────────────────────────────────────

pub struct ListSubscriptionsUseCase<S, U, R>
where
    S: SubscriptionRepository,
    U: UserRepository,
    R: RecipeRepository,
{
    pub subscriptions: S,
    pub users: U,
    pub recipes: R,
}

impl<S, U, R> ListSubscriptionsUseCase<S, U, R>
where
    S: SubscriptionRepository,
    U: UserRepository,
    R: RecipeRepository,
{
    /// Subscribed authors, newest subscription first, each with their latest
    /// recipes (optionally capped at `recipes_limit`) and a total count.
    pub async fn execute(
        &self,
        subscriber_id: Uuid,
        page: PageRequest,
        recipes_limit: Option<u64>,
    ) -> Result<Vec<SubscribedAuthor>, RecipesServiceError> {
        let author_ids = self
            .subscriptions
            .list_authors(subscriber_id, page.clamped())
            .await?;
        let authors: HashMap<Uuid, _> = self
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut out = Vec::with_capacity(author_ids.len());
        for author_id in author_ids {
            let author = authors
                .get(&author_id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("subscribed author {author_id} missing"))?;
            let recipes = self.recipes.list_by_author(author_id, recipes_limit).await?;
            let recipes_count = self.recipes.count_by_author(author_id).await?;
            out.push(SubscribedAuthor {
                author,
                recipes,
                recipes_count,
            });
        }
        Ok(out)
    }
}
