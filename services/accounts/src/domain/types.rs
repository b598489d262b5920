use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use portage_domain::profile::RatingScore;

/// Central identity record. Every login identifier is optional but unique
/// when present; the flags track which of them have been verified.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub is_active: bool,
    pub google_id: Option<String>,
    pub phone: Option<String>,
    pub passport_number: Option<String>,
    pub passport_verified: bool,
    pub national_id: Option<String>,
    pub national_id_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Email verification token row. `expires_at` is stored, never interpreted.
#[derive(Debug, Clone)]
pub struct EmailVerification {
    pub id: Uuid,
    pub account_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Password reset token row. Same shape as `EmailVerification`.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub id: Uuid,
    pub account_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Profile record extending an account, 1:1.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub account_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
    pub rating_score: Option<RatingScore>,
    pub total_deliveries_completed: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub username: Option<String>,
    pub rating_score: Option<RatingScore>,
    pub total_deliveries_completed: Option<i32>,
}

impl UserProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar_url.is_none()
            && self.username.is_none()
            && self.rating_score.is_none()
            && self.total_deliveries_completed.is_none()
    }
}

/// Geographic point. Coordinates are decimal(9,6) in the database.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i32,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

/// Postal address, optionally anchored to a location.
#[derive(Debug, Clone)]
pub struct Address {
    pub id: i32,
    pub location_id: Option<i32>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub country_code: Option<String>,
}

/// Length of issued verification/reset tokens.
pub const TOKEN_LEN: usize = 32;

/// Minimal email shape check: exactly one `@`, non-empty local part, and a
/// dotted domain. Full deliverability is out of scope.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Region and country codes are exactly two ASCII letters.
pub fn validate_two_letter_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}
