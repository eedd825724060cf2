// crates/marquee-store/src/memory.rs
//
// In-memory rating store. Nothing is persisted; used by tests and by callers
// that embed the engine without a catalog file.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use marquee_core::{EntityId, MarqueeError, Movie, Person, RatingRecord, RatingStore, Subject};

use crate::catalog::Catalog;

/// Rating store backed by a `Catalog` held in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingStore for InMemoryStore {
    async fn save_person(&self, person: &Person) -> Result<(), MarqueeError> {
        self.catalog.write().await.upsert_person(person.clone());
        Ok(())
    }

    async fn get_person(&self, id: &EntityId) -> Result<Option<Person>, MarqueeError> {
        Ok(self.catalog.read().await.people.get(id).cloned())
    }

    async fn list_people(&self) -> Result<Vec<Person>, MarqueeError> {
        Ok(self.catalog.read().await.people.values().cloned().collect())
    }

    async fn save_movie(&self, movie: &Movie) -> Result<(), MarqueeError> {
        self.catalog.write().await.upsert_movie(movie.clone())
    }

    async fn get_movie(&self, id: &EntityId) -> Result<Option<Movie>, MarqueeError> {
        Ok(self.catalog.read().await.movies.get(id).cloned())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, MarqueeError> {
        Ok(self.catalog.read().await.movies.values().cloned().collect())
    }

    async fn rate(&self, subject: Subject, value: f64) -> Result<(), MarqueeError> {
        self.catalog.write().await.rate(subject, value, Utc::now())
    }

    async fn rating_record(&self, id: &EntityId) -> Result<RatingRecord, MarqueeError> {
        self.catalog.read().await.rating_record(id)
    }
}
