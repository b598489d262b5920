use anyhow::Context as _;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use portage_accounts_schema::{
    accounts, addresses, email_verifications, locations, password_resets, users,
};
use portage_domain::pagination::PageRequest;
use portage_domain::profile::RatingScore;

use crate::domain::repository::{
    AccountRepository, AddressRepository, EmailVerificationRepository, LocationRepository,
    NewAddress, PasswordResetRepository, UserRepository,
};
use crate::domain::types::{
    Account, Address, EmailVerification, Location, PasswordReset, User, UserProfileChanges,
};
use crate::error::{AccountsServiceError, ConstraintKind, constraint_kind};

fn internal(err: DbErr, context: &'static str) -> AccountsServiceError {
    AccountsServiceError::Internal(anyhow::Error::new(err).context(context))
}

/// Insert failures on tables without foreign keys: a unique index rejecting a
/// duplicate identifier is the only constraint that can fire.
fn unique_err(context: &'static str) -> impl FnOnce(DbErr) -> AccountsServiceError {
    move |err| match constraint_kind(err.sql_err()) {
        Some(ConstraintKind::Unique) => AccountsServiceError::AlreadyExists,
        _ => internal(err, context),
    }
}

/// Insert failures on child tables: unique violations become `AlreadyExists`,
/// a foreign-key violation means the referenced parent row does not exist.
fn insert_err(
    missing_parent: AccountsServiceError,
    context: &'static str,
) -> impl FnOnce(DbErr) -> AccountsServiceError {
    move |err| match constraint_kind(err.sql_err()) {
        Some(ConstraintKind::Unique) => AccountsServiceError::AlreadyExists,
        Some(ConstraintKind::ForeignKey) => missing_parent,
        None => internal(err, context),
    }
}

/// Delete failures on restrict-on-delete parents: a foreign-key violation
/// means dependents still reference the row.
fn restrict_err(context: &'static str) -> impl FnOnce(DbErr) -> AccountsServiceError {
    move |err| match constraint_kind(err.sql_err()) {
        Some(ConstraintKind::ForeignKey) => AccountsServiceError::AccountInUse,
        _ => internal(err, context),
    }
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            email_verified: Set(account.email_verified),
            phone_verified: Set(account.phone_verified),
            is_active: Set(account.is_active),
            google_id: Set(account.google_id.clone()),
            phone: Set(account.phone.clone()),
            passport_number: Set(account.passport_number.clone()),
            passport_verified: Set(account.passport_verified),
            national_id: Set(account.national_id.clone()),
            national_id_verified: Set(account.national_id_verified),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(unique_err("create account"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn set_email_verified(
        &self,
        id: Uuid,
        verified: bool,
    ) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            email_verified: Set(verified),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|err| match err {
            DbErr::RecordNotUpdated => AccountsServiceError::AccountNotFound,
            err => internal(err, "set email verified"),
        })?;
        Ok(())
    }

    async fn set_phone_verified(
        &self,
        id: Uuid,
        verified: bool,
    ) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(id),
            phone_verified: Set(verified),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|err| match err {
            DbErr::RecordNotUpdated => AccountsServiceError::AccountNotFound,
            err => internal(err, "set phone verified"),
        })?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        let result = accounts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(restrict_err("delete account"))?;
        Ok(result.rows_affected > 0)
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        email_verified: model.email_verified,
        phone_verified: model.phone_verified,
        is_active: model.is_active,
        google_id: model.google_id,
        phone: model.phone,
        passport_number: model.passport_number,
        passport_verified: model.passport_verified,
        national_id: model.national_id,
        national_id_verified: model.national_id_verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Email verification repository ────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmailVerificationRepository {
    pub db: DatabaseConnection,
}

impl EmailVerificationRepository for DbEmailVerificationRepository {
    async fn create(&self, verification: &EmailVerification) -> Result<(), AccountsServiceError> {
        email_verifications::ActiveModel {
            id: Set(verification.id),
            account_id: Set(verification.account_id),
            token: Set(verification.token.clone()),
            expires_at: Set(verification.expires_at),
            created_at: Set(verification.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(
            AccountsServiceError::AccountNotFound,
            "create email verification",
        ))?;
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<EmailVerification>, AccountsServiceError> {
        let model = email_verifications::Entity::find()
            .filter(email_verifications::Column::Token.eq(token))
            .one(&self.db)
            .await
            .context("find email verification by token")?;
        Ok(model.map(email_verification_from_model))
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<EmailVerification>, AccountsServiceError> {
        let page = page.clamped();
        let models = email_verifications::Entity::find()
            .filter(email_verifications::Column::AccountId.eq(account_id))
            .order_by_desc(email_verifications::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list email verifications")?;
        Ok(models.into_iter().map(email_verification_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        let result = email_verifications::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete email verification")?;
        Ok(result.rows_affected > 0)
    }
}

fn email_verification_from_model(model: email_verifications::Model) -> EmailVerification {
    EmailVerification {
        id: model.id,
        account_id: model.account_id,
        token: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Password reset repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPasswordResetRepository {
    pub db: DatabaseConnection,
}

impl PasswordResetRepository for DbPasswordResetRepository {
    async fn create(&self, reset: &PasswordReset) -> Result<(), AccountsServiceError> {
        password_resets::ActiveModel {
            id: Set(reset.id),
            account_id: Set(reset.account_id),
            token: Set(reset.token.clone()),
            expires_at: Set(reset.expires_at),
            created_at: Set(reset.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(
            AccountsServiceError::AccountNotFound,
            "create password reset",
        ))?;
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordReset>, AccountsServiceError> {
        let model = password_resets::Entity::find()
            .filter(password_resets::Column::Token.eq(token))
            .one(&self.db)
            .await
            .context("find password reset by token")?;
        Ok(model.map(password_reset_from_model))
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<PasswordReset>, AccountsServiceError> {
        let page = page.clamped();
        let models = password_resets::Entity::find()
            .filter(password_resets::Column::AccountId.eq(account_id))
            .order_by_desc(password_resets::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list password resets")?;
        Ok(models.into_iter().map(password_reset_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        let result = password_resets::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete password reset")?;
        Ok(result.rows_affected > 0)
    }
}

fn password_reset_from_model(model: password_resets::Model) -> PasswordReset {
    PasswordReset {
        id: model.id,
        account_id: model.account_id,
        token: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &User) -> Result<(), AccountsServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            account_id: Set(user.account_id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            avatar_url: Set(user.avatar_url.clone()),
            username: Set(user.username.clone()),
            rating_score: Set(user.rating_score.map(RatingScore::get)),
            total_deliveries_completed: Set(user.total_deliveries_completed),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(
            AccountsServiceError::AccountNotFound,
            "create user",
        ))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_account_id(
        &self,
        account_id: Uuid,
    ) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find user by account id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        changes: &UserProfileChanges,
    ) -> Result<(), AccountsServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref first_name) = changes.first_name {
            am.first_name = Set(Some(first_name.clone()));
        }
        if let Some(ref last_name) = changes.last_name {
            am.last_name = Set(Some(last_name.clone()));
        }
        if let Some(ref avatar_url) = changes.avatar_url {
            am.avatar_url = Set(Some(avatar_url.clone()));
        }
        if let Some(ref username) = changes.username {
            am.username = Set(Some(username.clone()));
        }
        if let Some(rating) = changes.rating_score {
            am.rating_score = Set(Some(rating.get()));
        }
        if let Some(total) = changes.total_deliveries_completed {
            am.total_deliveries_completed = Set(Some(total));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => AccountsServiceError::UserNotFound,
            err => match constraint_kind(err.sql_err()) {
                Some(ConstraintKind::Unique) => AccountsServiceError::AlreadyExists,
                _ => internal(err, "update user profile"),
            },
        })?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        account_id: model.account_id,
        first_name: model.first_name,
        last_name: model.last_name,
        avatar_url: model.avatar_url,
        username: model.username,
        // Out-of-range stored values cannot be represented; treat as unset.
        rating_score: model.rating_score.and_then(RatingScore::new),
        total_deliveries_completed: model.total_deliveries_completed,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Location repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLocationRepository {
    pub db: DatabaseConnection,
}

impl LocationRepository for DbLocationRepository {
    async fn create(
        &self,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> Result<Location, AccountsServiceError> {
        let model = locations::ActiveModel {
            latitude: Set(latitude),
            longitude: Set(longitude),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create location")?;
        Ok(location_from_model(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Location>, AccountsServiceError> {
        let model = locations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find location by id")?;
        Ok(model.map(location_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, AccountsServiceError> {
        // Dependent addresses are not blocked: their location_id is cleared
        // by the database (ON DELETE SET NULL).
        let result = locations::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete location")?;
        Ok(result.rows_affected > 0)
    }
}

fn location_from_model(model: locations::Model) -> Location {
    Location {
        id: model.id,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}

// ── Address repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAddressRepository {
    pub db: DatabaseConnection,
}

impl AddressRepository for DbAddressRepository {
    async fn create(&self, address: &NewAddress) -> Result<Address, AccountsServiceError> {
        let model = addresses::ActiveModel {
            location_id: Set(address.location_id),
            line1: Set(address.line1.clone()),
            line2: Set(address.line2.clone()),
            city: Set(address.city.clone()),
            region_code: Set(address.region_code.clone()),
            region_name: Set(address.region_name.clone()),
            country_code: Set(address.country_code.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(insert_err(
            AccountsServiceError::LocationNotFound,
            "create address",
        ))?;
        Ok(address_from_model(model))
    }

    async fn find_with_location(
        &self,
        id: i32,
    ) -> Result<Option<(Address, Option<Location>)>, AccountsServiceError> {
        let result = addresses::Entity::find_by_id(id)
            .find_also_related(locations::Entity)
            .one(&self.db)
            .await
            .context("find address with location")?;
        Ok(result.map(|(address, location)| {
            (
                address_from_model(address),
                location.map(location_from_model),
            )
        }))
    }

    async fn list_by_city(
        &self,
        city: &str,
        page: PageRequest,
    ) -> Result<Vec<Address>, AccountsServiceError> {
        let page = page.clamped();
        let models = addresses::Entity::find()
            .filter(addresses::Column::City.eq(city))
            .order_by_asc(addresses::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list addresses by city")?;
        Ok(models.into_iter().map(address_from_model).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, AccountsServiceError> {
        let result = addresses::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete address")?;
        Ok(result.rows_affected > 0)
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        location_id: model.location_id,
        line1: model.line1,
        line2: model.line2,
        city: model.city,
        region_code: model.region_code,
        region_name: model.region_name,
        country_code: model.country_code,
    }
}
