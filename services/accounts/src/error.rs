use sea_orm::SqlErr;

/// Accounts module error variants.
///
/// Constraint failures reported by the database (uniqueness,
/// restrict-on-delete) are classified into typed variants so callers never
/// have to parse driver messages.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("account not found")]
    AccountNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("location not found")]
    LocationNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("token not found")]
    TokenNotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("account is referenced by other rows")]
    AccountInUse,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid rating")]
    InvalidRating,
    #[error("invalid region code")]
    InvalidRegionCode,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::LocationNotFound => "LOCATION_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::AccountInUse => "ACCOUNT_IN_USE",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidRegionCode => "INVALID_REGION_CODE",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

/// Constraint class extracted from a driver-level SQL error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintKind {
    /// A unique index rejected a duplicate value.
    Unique,
    /// A foreign key blocked the statement: the parent row is missing on
    /// insert, or still referenced on delete.
    ForeignKey,
}

pub(crate) fn constraint_kind(sql_err: Option<SqlErr>) -> Option<ConstraintKind> {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(ConstraintKind::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(ConstraintKind::ForeignKey),
        _ => None,
    }
}
