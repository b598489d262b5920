use chrono::{DateTime, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{EmailVerificationRepository, PasswordResetRepository};
use crate::domain::types::{EmailVerification, PasswordReset, TOKEN_LEN};
use crate::error::AccountsServiceError;

/// Charset for issued tokens (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── IssueEmailVerification ───────────────────────────────────────────────────

pub struct IssueEmailVerificationInput {
    pub account_id: Uuid,
    /// Stored verbatim; nothing in this module checks it later.
    pub expires_at: DateTime<Utc>,
}

pub struct IssueEmailVerificationUseCase<R: EmailVerificationRepository> {
    pub repo: R,
}

impl<R: EmailVerificationRepository> IssueEmailVerificationUseCase<R> {
    pub async fn execute(
        &self,
        input: IssueEmailVerificationInput,
    ) -> Result<EmailVerification, AccountsServiceError> {
        let verification = EmailVerification {
            id: Uuid::new_v4(),
            account_id: input.account_id,
            token: generate_token(),
            expires_at: input.expires_at,
            created_at: Utc::now(),
        };
        self.repo.create(&verification).await?;
        Ok(verification)
    }
}

// ── GetEmailVerification ─────────────────────────────────────────────────────

pub struct GetEmailVerificationUseCase<R: EmailVerificationRepository> {
    pub repo: R,
}

impl<R: EmailVerificationRepository> GetEmailVerificationUseCase<R> {
    pub async fn execute(&self, token: &str) -> Result<EmailVerification, AccountsServiceError> {
        self.repo
            .find_by_token(token)
            .await?
            .ok_or(AccountsServiceError::TokenNotFound)
    }
}

// ── IssuePasswordReset ───────────────────────────────────────────────────────

pub struct IssuePasswordResetInput {
    pub account_id: Uuid,
    /// Stored verbatim; nothing in this module checks it later.
    pub expires_at: DateTime<Utc>,
}

pub struct IssuePasswordResetUseCase<R: PasswordResetRepository> {
    pub repo: R,
}

impl<R: PasswordResetRepository> IssuePasswordResetUseCase<R> {
    pub async fn execute(
        &self,
        input: IssuePasswordResetInput,
    ) -> Result<PasswordReset, AccountsServiceError> {
        let reset = PasswordReset {
            id: Uuid::new_v4(),
            account_id: input.account_id,
            token: generate_token(),
            expires_at: input.expires_at,
            created_at: Utc::now(),
        };
        self.repo.create(&reset).await?;
        Ok(reset)
    }
}

// ── GetPasswordReset ─────────────────────────────────────────────────────────

pub struct GetPasswordResetUseCase<R: PasswordResetRepository> {
    pub repo: R,
}

impl<R: PasswordResetRepository> GetPasswordResetUseCase<R> {
    pub async fn execute(&self, token: &str) -> Result<PasswordReset, AccountsServiceError> {
        self.repo
            .find_by_token(token)
            .await?
            .ok_or(AccountsServiceError::TokenNotFound)
    }
}
