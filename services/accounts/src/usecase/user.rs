use chrono::Utc;
use uuid::Uuid;

use portage_domain::profile::RatingScore;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserProfileChanges};
use crate::error::AccountsServiceError;

fn validated_rating(raw: Option<i32>) -> Result<Option<RatingScore>, AccountsServiceError> {
    raw.map(|value| RatingScore::new(value).ok_or(AccountsServiceError::InvalidRating))
        .transpose()
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub account_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
    pub rating_score: Option<i32>,
    pub total_deliveries_completed: Option<i32>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, AccountsServiceError> {
        let rating_score = validated_rating(input.rating_score)?;
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            account_id: input.account_id,
            first_name: input.first_name,
            last_name: input.last_name,
            avatar_url: input.avatar_url,
            username: input.username,
            rating_score,
            total_deliveries_completed: input.total_deliveries_completed,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountsServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
    pub rating_score: Option<i32>,
    pub total_deliveries_completed: Option<i32>,
}

pub struct UpdateProfileUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), AccountsServiceError> {
        let changes = UserProfileChanges {
            first_name: input.first_name,
            last_name: input.last_name,
            avatar_url: input.avatar_url,
            username: input.username,
            rating_score: validated_rating(input.rating_score)?,
            total_deliveries_completed: input.total_deliveries_completed,
        };
        if changes.is_empty() {
            return Err(AccountsServiceError::MissingData);
        }
        self.repo.update_profile(user_id, &changes).await
    }
}
