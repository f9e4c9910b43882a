use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{SubscriptionRepository, UserRepository};
use crate::domain::types::User;
use crate::error::RecipesServiceError;

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U, S>
where
    U: UserRepository,
    S: SubscriptionRepository,
{
    pub users: U,
    pub subscriptions: S,
}

impl<U, S> GetUserUseCase<U, S>
where
    U: UserRepository,
    S: SubscriptionRepository,
{
    /// Returns the profile and whether the viewer subscribes to it.
    pub async fn execute(
        &self,
        viewer: Option<Uuid>,
        user_id: Uuid,
    ) -> Result<(User, bool), RecipesServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(RecipesServiceError::UserNotFound)?;
        let subscribed = match viewer {
            Some(viewer_id) => !self
                .subscriptions
                .filter_subscribed(viewer_id, &[user_id])
                .await?
                .is_empty(),
            None => false,
        };
        Ok((user, subscribed))
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct CreateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CreateUserUseCase<U> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, RecipesServiceError> {
        if self
            .users
            .email_or_username_taken(&input.email, &input.username)
            .await?
        {
            return Err(RecipesServiceError::UserAlreadyExists);
        }
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}
