// crates/marquee-core/src/entity.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;

/// Lowest rating accepted on the viewer's scale.
pub const RATING_MIN: f64 = 1.0;

/// Highest rating accepted on the viewer's scale.
pub const RATING_MAX: f64 = 10.0;

/// Midpoint of the rating scale, used as the baseline for unrated people.
pub const NEUTRAL_RATING: f64 = 5.5;

/// Stable identifier of a scoreable subject (a person or a movie).
///
/// Identifiers are opaque strings supplied by the data layer, e.g. an
/// IMDb-style numeric id such as `"0000138"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The rating data a weight row is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// The entity's own average rating.
    pub baseline: f64,
    /// Ratings of past works this entity contributed to. Empty if none.
    pub history: Vec<f64>,
}

impl RatingRecord {
    pub fn new(baseline: f64, history: Vec<f64>) -> Self {
        Self { baseline, history }
    }
}

impl Default for RatingRecord {
    fn default() -> Self {
        Self {
            baseline: NEUTRAL_RATING,
            history: Vec::new(),
        }
    }
}

/// A person who can appear in a movie's cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
}

/// A movie with its cast in billing order (top-billed first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    pub cast: Vec<EntityId>,
}

/// What a rating was given to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Subject {
    Person(EntityId),
    Movie(EntityId),
}

/// One rating the viewer recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub subject: Subject,
    pub value: f64,
    pub rated_at: DateTime<Utc>,
}

/// Check that a rating lies on the `[RATING_MIN, RATING_MAX]` scale.
///
/// # Errors
/// Returns `MarqueeError::InvalidRating` for out-of-range or NaN values.
pub fn validate_rating(value: f64) -> Result<f64, MarqueeError> {
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(MarqueeError::InvalidRating(value))
    }
}
