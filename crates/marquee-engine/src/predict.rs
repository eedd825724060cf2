// crates/marquee-engine/src/predict.rs
//
// Enjoyment prediction for a single movie.
//
// The movie's billed cast (up to `max_cast` people) becomes a pattern whose
// length is the number of billed slots. Each cast member gets a weight row
// from their rating record, and the cast list is scored in billing order.
// The predicted enjoyment is the per-position average of that score.

use serde::Serialize;

use marquee_core::{EntityId, MarqueeError, RatingStore, WeightedPattern};

use crate::Engine;

/// One cast member's share of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub position: usize,
    pub person: EntityId,
    pub weight: f64,
}

/// Predicted enjoyment of a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub movie: EntityId,
    pub title: String,
    /// Pattern score: sum of each billed person's weight at their position.
    pub total: f64,
    /// `total / positions`, on roughly the same scale as a rating.
    pub enjoyment: f64,
    pub contributions: Vec<Contribution>,
}

impl<S: RatingStore> Engine<S> {
    /// Predict the viewer's enjoyment of `movie_id`.
    ///
    /// # Errors
    /// - `NotFound` if the movie or a cast member is unknown to the store.
    /// - `InvalidState` if the movie has no cast.
    pub async fn predict(&self, movie_id: &EntityId) -> Result<Prediction, MarqueeError> {
        let movie = self
            .store
            .get_movie(movie_id)
            .await?
            .ok_or_else(|| MarqueeError::NotFound(format!("movie {}", movie_id)))?;

        let billed: Vec<EntityId> = movie.cast.iter().take(self.config.max_cast).cloned().collect();
        if billed.is_empty() {
            return Err(MarqueeError::InvalidState(format!(
                "movie {} has no cast to predict from",
                movie_id
            )));
        }

        let mut pattern = WeightedPattern::new(billed.len());
        for person in &billed {
            let record = self.store.rating_record(person).await?;
            pattern.add_row(person.clone(), &record);
        }

        let total = pattern.score(&billed)?;
        let enjoyment = total / pattern.len() as f64;

        let contributions = billed
            .iter()
            .enumerate()
            .map(|(i, person)| {
                Ok(Contribution {
                    position: i + 1,
                    person: person.clone(),
                    weight: pattern.weight_at(i + 1, person)?,
                })
            })
            .collect::<Result<Vec<_>, MarqueeError>>()?;

        tracing::info!(
            "Predicted {} ({}): enjoyment {:.2} over {} billed",
            movie.title,
            movie_id,
            enjoyment,
            billed.len()
        );

        Ok(Prediction {
            movie: movie.id,
            title: movie.title,
            total,
            enjoyment,
            contributions,
        })
    }
}
