#![allow(async_fn_in_trait)]

use uuid::Uuid;

use portage_domain::pagination::PageRequest;
use rust_decimal::Decimal;

use crate::domain::types::{
    Account, Address, EmailVerification, Location, PasswordReset, User, UserProfileChanges,
};
use crate::error::AccountsServiceError;

/// Repository for identity records.
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError>;
    async fn set_email_verified(&self, id: Uuid, verified: bool)
    -> Result<(), AccountsServiceError>;
    async fn set_phone_verified(&self, id: Uuid, verified: bool)
    -> Result<(), AccountsServiceError>;

    /// Delete an account. Returns `true` if a row was deleted; fails with
    /// `AccountInUse` while dependents reference it (restrict-on-delete).
    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError>;
}

/// Repository for email verification tokens.
pub trait EmailVerificationRepository: Send + Sync {
    async fn create(&self, verification: &EmailVerification) -> Result<(), AccountsServiceError>;
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<EmailVerification>, AccountsServiceError>;
    async fn list_for_account(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmailVerification>, AccountsServiceError>;

    /// Delete a token row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError>;
}

/// Repository for password reset tokens.
pub trait PasswordResetRepository: Send + Sync {
    async fn create(&self, reset: &PasswordReset) -> Result<(), AccountsServiceError>;
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordReset>, AccountsServiceError>;
    async fn list_for_account(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<PasswordReset>, AccountsServiceError>;

    /// Delete a token row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError>;
}

/// Repository for user profiles.
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), AccountsServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError>;
    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<User>, AccountsServiceError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, AccountsServiceError>;
    async fn update_profile(
        &self,
        id: Uuid,
        changes: &UserProfileChanges,
    ) -> Result<(), AccountsServiceError>;
}

/// Repository for geographic points.
pub trait LocationRepository: Send + Sync {
    /// Persist a point and return it with its database-assigned id.
    async fn create(
        &self,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> Result<Location, AccountsServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Location>, AccountsServiceError>;

    /// Delete a point. Dependent addresses keep their row; the database
    /// clears their `location_id` (set-null-on-delete).
    async fn delete(&self, id: i32) -> Result<bool, AccountsServiceError>;
}

/// A new address before the database assigns its id.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub location_id: Option<i32>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub country_code: Option<String>,
}

/// Repository for postal addresses.
pub trait AddressRepository: Send + Sync {
    /// Persist an address and return it with its database-assigned id.
    async fn create(&self, address: &NewAddress) -> Result<Address, AccountsServiceError>;
    async fn find_with_location(
        &self,
        id: i32,
    ) -> Result<Option<(Address, Option<Location>)>, AccountsServiceError>;
    async fn list_by_city(
        &self,
        city: &str,
        page: PageRequest,
    ) -> Result<Vec<Address>, AccountsServiceError>;

    /// Delete an address. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, AccountsServiceError>;
}
