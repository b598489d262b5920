//! Profile domain types.

use serde::{Deserialize, Serialize};

/// Courier rating, bounded 1–5 inclusive.
///
/// Construction is the only validation point; a `RatingScore` in hand is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct RatingScore(i32);

/// Returned when a raw value falls outside the 1–5 rating range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating score {0} out of range 1..=5")]
pub struct RatingOutOfRange(pub i32);

impl RatingScore {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Build a rating from a raw value. Returns `None` outside 1–5.
    pub fn new(value: i32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// The raw stored value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for RatingScore {
    type Error = RatingOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RatingOutOfRange(value))
    }
}

impl From<RatingScore> for i32 {
    fn from(rating: RatingScore) -> Self {
        rating.0
    }
}
