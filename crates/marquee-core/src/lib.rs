// crates/marquee-core/src/lib.rs
//
// marquee-core: Core types, rating transform, and weighted-pattern scoring
// for Marquee.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the entity and rating data structures, the error type, the
// per-entity weight row generator, and the WeightedPattern used for both
// enjoyment prediction and p-value computation.

pub mod entity;
pub mod error;
pub mod pattern;
pub mod traits;
pub mod transform;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use marquee_core::WeightedPattern;`

// Entity types
pub use entity::{
    validate_rating, EntityId, Movie, Person, RatingEntry, RatingRecord, Subject,
    NEUTRAL_RATING, RATING_MAX, RATING_MIN,
};

// Scoring
pub use pattern::{PValueOptions, WeightedPattern};
pub use transform::{generate_row, impact, WeightRow};

// Error type
pub use error::MarqueeError;

// Traits
pub use traits::RatingStore;
