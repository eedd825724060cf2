// crates/marquee-core/src/traits.rs

use async_trait::async_trait;

use crate::entity::{EntityId, Movie, Person, RatingRecord, Subject};
use crate::error::MarqueeError;

/// Trait for the viewer's rating store.
///
/// Implemented by marquee-store (in-memory and JSON file backends).
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Save a person. Overwrites if the ID already exists.
    async fn save_person(&self, person: &Person) -> Result<(), MarqueeError>;

    /// Retrieve a person by ID.
    async fn get_person(&self, id: &EntityId) -> Result<Option<Person>, MarqueeError>;

    /// List all people, ordered by ID.
    async fn list_people(&self) -> Result<Vec<Person>, MarqueeError>;

    /// Save a movie. Every cast member must already be a known person.
    async fn save_movie(&self, movie: &Movie) -> Result<(), MarqueeError>;

    /// Retrieve a movie by ID.
    async fn get_movie(&self, id: &EntityId) -> Result<Option<Movie>, MarqueeError>;

    /// List all movies, ordered by ID.
    async fn list_movies(&self) -> Result<Vec<Movie>, MarqueeError>;

    /// Record a rating for a known person or movie.
    ///
    /// Returns `InvalidRating` off the 1-10 scale and `NotFound` for an
    /// unknown subject.
    async fn rate(&self, subject: Subject, value: f64) -> Result<(), MarqueeError>;

    /// Derive the rating record a weight row is generated from.
    async fn rating_record(&self, id: &EntityId) -> Result<RatingRecord, MarqueeError>;
}
