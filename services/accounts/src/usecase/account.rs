use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, validate_email};
use crate::error::AccountsServiceError;

// ── RegisterAccount ──────────────────────────────────────────────────────────

pub struct RegisterAccountInput {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub phone: Option<String>,
    pub passport_number: Option<String>,
    pub national_id: Option<String>,
}

pub struct RegisterAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> RegisterAccountUseCase<R> {
    pub async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<Account, AccountsServiceError> {
        if let Some(ref email) = input.email {
            if !validate_email(email) {
                return Err(AccountsServiceError::InvalidEmail);
            }
        }
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            email: input.email,
            password_hash: input.password_hash,
            email_verified: false,
            phone_verified: false,
            is_active: true,
            google_id: input.google_id,
            phone: input.phone,
            passport_number: input.passport_number,
            passport_verified: false,
            national_id: input.national_id,
            national_id_verified: false,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&account).await?;
        Ok(account)
    }
}

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, AccountsServiceError> {
        self.repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── FindAccountByEmail ───────────────────────────────────────────────────────

pub struct FindAccountByEmailUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> FindAccountByEmailUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Account, AccountsServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── MarkVerified ─────────────────────────────────────────────────────────────

/// Which contact channel a verification flag applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
}

pub struct MarkVerifiedUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> MarkVerifiedUseCase<R> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        channel: ContactChannel,
    ) -> Result<(), AccountsServiceError> {
        match channel {
            ContactChannel::Email => self.repo.set_email_verified(account_id, true).await,
            ContactChannel::Phone => self.repo.set_phone_verified(account_id, true).await,
        }
    }
}

// ── DeleteAccount ────────────────────────────────────────────────────────────

pub struct DeleteAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> DeleteAccountUseCase<R> {
    /// Fails with `AccountInUse` while verification tokens or a profile
    /// still reference the account (restrict-on-delete).
    pub async fn execute(&self, account_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.repo.delete(account_id).await? {
            Ok(())
        } else {
            Err(AccountsServiceError::AccountNotFound)
        }
    }
}
