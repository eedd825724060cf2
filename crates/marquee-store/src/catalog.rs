// crates/marquee-store/src/catalog.rs
//
// The viewer's catalog: people, movies, and every rating recorded so far.
//
// Document format (JSON):
//   {
//     "people":  { "<id>": { "id": ..., "name": ... } },
//     "movies":  { "<id>": { "id": ..., "title": ..., "cast": [<id>, ...] } },
//     "ratings": [ { "subject": { "kind": "person"|"movie", "id": ... },
//                    "value": 7.5, "rated_at": "<rfc3339>" } ]
//   }
//
// Ratings are append-only. A person's rating record is derived on demand:
// the baseline is the mean of the viewer's ratings of that person, and the
// history is the viewer's ratings of every movie the person was cast in.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marquee_core::{
    validate_rating, EntityId, MarqueeError, Movie, Person, RatingEntry, RatingRecord, Subject,
    NEUTRAL_RATING,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub people: BTreeMap<EntityId, Person>,
    #[serde(default)]
    pub movies: BTreeMap<EntityId, Movie>,
    #[serde(default)]
    pub ratings: Vec<RatingEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a person.
    pub fn upsert_person(&mut self, person: Person) {
        self.people.insert(person.id.clone(), person);
    }

    /// Insert or replace a movie.
    ///
    /// # Errors
    /// Returns `MarqueeError::NotFound` if a cast member is not a known person.
    pub fn upsert_movie(&mut self, movie: Movie) -> Result<(), MarqueeError> {
        if let Some(missing) = movie.cast.iter().find(|id| !self.people.contains_key(*id)) {
            return Err(MarqueeError::NotFound(format!(
                "cast member {} of movie {}",
                missing, movie.id
            )));
        }
        self.movies.insert(movie.id.clone(), movie);
        Ok(())
    }

    /// Append a rating for a known subject.
    ///
    /// # Errors
    /// - `InvalidRating` if `value` is off the 1-10 scale.
    /// - `NotFound` if the subject is not in the catalog.
    pub fn rate(&mut self, subject: Subject, value: f64, rated_at: DateTime<Utc>) -> Result<(), MarqueeError> {
        let value = validate_rating(value)?;
        let (kind, known) = match &subject {
            Subject::Person(id) => ("person", self.people.contains_key(id)),
            Subject::Movie(id) => ("movie", self.movies.contains_key(id)),
        };
        if !known {
            let id = match &subject {
                Subject::Person(id) | Subject::Movie(id) => id,
            };
            return Err(MarqueeError::NotFound(format!("{} {}", kind, id)));
        }
        self.ratings.push(RatingEntry {
            subject,
            value,
            rated_at,
        });
        Ok(())
    }

    /// Derive the rating record for a person.
    ///
    /// # Errors
    /// Returns `MarqueeError::NotFound` for an unknown person.
    pub fn rating_record(&self, id: &EntityId) -> Result<RatingRecord, MarqueeError> {
        if !self.people.contains_key(id) {
            return Err(MarqueeError::NotFound(format!("person {}", id)));
        }

        let own: Vec<f64> = self
            .ratings
            .iter()
            .filter(|r| matches!(&r.subject, Subject::Person(p) if p == id))
            .map(|r| r.value)
            .collect();
        let baseline = if own.is_empty() {
            NEUTRAL_RATING
        } else {
            own.iter().sum::<f64>() / own.len() as f64
        };

        let history = self
            .ratings
            .iter()
            .filter(|r| match &r.subject {
                Subject::Movie(m) => self.movies.get(m).is_some_and(|movie| movie.cast.contains(id)),
                Subject::Person(_) => false,
            })
            .map(|r| r.value)
            .collect();

        Ok(RatingRecord { baseline, history })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: EntityId::from(id),
            name: name.to_string(),
        }
    }

    fn movie(id: &str, title: &str, cast: &[&str]) -> Movie {
        Movie {
            id: EntityId::from(id),
            title: title.to_string(),
            cast: cast.iter().map(|c| EntityId::from(*c)).collect(),
        }
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.upsert_person(person("1", "Jeff"));
        catalog.upsert_person(person("2", "Mike"));
        catalog.upsert_movie(movie("m1", "First", &["1", "2"])).unwrap();
        catalog.upsert_movie(movie("m2", "Second", &["2"])).unwrap();
        catalog
    }

    #[test]
    fn test_unrated_person_gets_neutral_record() {
        let catalog = seeded();
        let record = catalog.rating_record(&EntityId::from("1")).unwrap();
        assert_eq!(record, RatingRecord::default());
    }

    #[test]
    fn test_record_baseline_is_mean_of_person_ratings() {
        let mut catalog = seeded();
        let now = Utc::now();
        catalog.rate(Subject::Person(EntityId::from("1")), 8.0, now).unwrap();
        catalog.rate(Subject::Person(EntityId::from("1")), 9.0, now).unwrap();
        catalog.rate(Subject::Person(EntityId::from("2")), 2.0, now).unwrap();

        let record = catalog.rating_record(&EntityId::from("1")).unwrap();
        assert!((record.baseline - 8.5).abs() < 1e-12);
        assert!(record.history.is_empty());
    }

    #[test]
    fn test_record_history_follows_cast_membership() {
        let mut catalog = seeded();
        let now = Utc::now();
        catalog.rate(Subject::Movie(EntityId::from("m1")), 7.0, now).unwrap();
        catalog.rate(Subject::Movie(EntityId::from("m2")), 3.0, now).unwrap();
        catalog.rate(Subject::Movie(EntityId::from("m1")), 9.0, now).unwrap();

        let jeff = catalog.rating_record(&EntityId::from("1")).unwrap();
        assert_eq!(jeff.history, vec![7.0, 9.0]);

        let mike = catalog.rating_record(&EntityId::from("2")).unwrap();
        assert_eq!(mike.history, vec![7.0, 3.0, 9.0]);
    }

    #[test]
    fn test_rate_rejects_off_scale_and_unknown() {
        let mut catalog = seeded();
        let now = Utc::now();
        assert!(matches!(
            catalog.rate(Subject::Person(EntityId::from("1")), 11.0, now),
            Err(MarqueeError::InvalidRating(_))
        ));
        assert!(matches!(
            catalog.rate(Subject::Movie(EntityId::from("nope")), 5.0, now),
            Err(MarqueeError::NotFound(_))
        ));
        assert!(catalog.ratings.is_empty());
    }

    #[test]
    fn test_movie_with_unknown_cast_rejected() {
        let mut catalog = seeded();
        let err = catalog.upsert_movie(movie("m3", "Third", &["1", "99"])).unwrap_err();
        assert!(matches!(err, MarqueeError::NotFound(ref msg) if msg.contains("99")));
        assert!(!catalog.movies.contains_key(&EntityId::from("m3")));
    }

    #[test]
    fn test_unknown_person_record_not_found() {
        let catalog = seeded();
        assert!(matches!(
            catalog.rating_record(&EntityId::from("99")),
            Err(MarqueeError::NotFound(_))
        ));
    }

    #[test]
    fn test_catalog_json_shape() {
        let mut catalog = seeded();
        catalog.rate(Subject::Person(EntityId::from("2")), 4.0, Utc::now()).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["people"]["1"]["name"], "Jeff");
        assert_eq!(json["movies"]["m1"]["cast"][1], "2");
        assert_eq!(json["ratings"][0]["subject"]["kind"], "person");

        let back: Catalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }
}
