// crates/marquee-store/src/file.rs
//
// JSON file rating store.
//
// The whole catalog is loaded when the store is opened and the whole document
// is rewritten after every successful mutation. Writes go to a sibling
// `.tmp` file first and are renamed into place, so a crash mid-write leaves
// the previous document intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use marquee_core::{EntityId, MarqueeError, Movie, Person, RatingRecord, RatingStore, Subject};

use crate::catalog::Catalog;

/// Rating store persisted as a single pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    catalog: RwLock<Catalog>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the catalog if the file exists.
    ///
    /// A missing file is an empty catalog; it is created on the first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, MarqueeError> {
        let path = path.as_ref().to_path_buf();
        let catalog = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let catalog: Catalog = serde_json::from_slice(&bytes)?;
                tracing::info!(
                    "Loaded catalog from {} ({} people, {} movies, {} ratings)",
                    path.display(),
                    catalog.people.len(),
                    catalog.movies.len(),
                    catalog.ratings.len()
                );
                catalog
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No catalog at {}, starting empty", path.display());
                Catalog::new()
            }
            Err(e) => {
                return Err(MarqueeError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self {
            path,
            catalog: RwLock::new(catalog),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the catalog, persist it, then publish it.
    ///
    /// If the change or the write fails, the in-memory catalog is untouched.
    async fn mutate<F>(&self, change: F) -> Result<(), MarqueeError>
    where
        F: FnOnce(&mut Catalog) -> Result<(), MarqueeError> + Send,
    {
        let mut guard = self.catalog.write().await;
        let mut next = guard.clone();
        change(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn persist(&self, catalog: &Catalog) -> Result<(), MarqueeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    MarqueeError::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let json = serde_json::to_vec_pretty(catalog)?;
        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            MarqueeError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            MarqueeError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Wrote catalog to {} ({} bytes)", self.path.display(), json.len());
        Ok(())
    }
}

/// Sibling path used for the write-then-rename: `<file name>.tmp`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl RatingStore for JsonFileStore {
    async fn save_person(&self, person: &Person) -> Result<(), MarqueeError> {
        let person = person.clone();
        self.mutate(move |c| {
            c.upsert_person(person);
            Ok(())
        })
        .await
    }

    async fn get_person(&self, id: &EntityId) -> Result<Option<Person>, MarqueeError> {
        Ok(self.catalog.read().await.people.get(id).cloned())
    }

    async fn list_people(&self) -> Result<Vec<Person>, MarqueeError> {
        Ok(self.catalog.read().await.people.values().cloned().collect())
    }

    async fn save_movie(&self, movie: &Movie) -> Result<(), MarqueeError> {
        let movie = movie.clone();
        self.mutate(move |c| c.upsert_movie(movie)).await
    }

    async fn get_movie(&self, id: &EntityId) -> Result<Option<Movie>, MarqueeError> {
        Ok(self.catalog.read().await.movies.get(id).cloned())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, MarqueeError> {
        Ok(self.catalog.read().await.movies.values().cloned().collect())
    }

    async fn rate(&self, subject: Subject, value: f64) -> Result<(), MarqueeError> {
        let now = Utc::now();
        self.mutate(move |c| c.rate(subject, value, now)).await
    }

    async fn rating_record(&self, id: &EntityId) -> Result<RatingRecord, MarqueeError> {
        self.catalog.read().await.rating_record(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Create a unique temporary file path using UUID to avoid conflicts.
    fn temp_store_path(label: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("marquee_test_{}_{}", label, Uuid::now_v7()))
            .join("catalog.json")
    }

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: EntityId::from(id),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let path = temp_store_path("missing");
        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(store.list_people().await.unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_catalog_survives_reopen() {
        let path = temp_store_path("reopen");
        {
            let store = JsonFileStore::open(&path).await.unwrap();
            store.save_person(&person("1", "Jeff")).await.unwrap();
            store.save_person(&person("2", "Mike")).await.unwrap();
            store
                .save_movie(&Movie {
                    id: EntityId::from("m1"),
                    title: "Heat".to_string(),
                    cast: vec![EntityId::from("2"), EntityId::from("1")],
                })
                .await
                .unwrap();
            store.rate(Subject::Person(EntityId::from("1")), 8.0).await.unwrap();
            store.rate(Subject::Movie(EntityId::from("m1")), 6.0).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.list_people().await.unwrap().len(), 2);
        let movie = reopened.get_movie(&EntityId::from("m1")).await.unwrap().unwrap();
        assert_eq!(movie.cast[0].as_str(), "2");

        let record = reopened.rating_record(&EntityId::from("1")).await.unwrap();
        assert!((record.baseline - 8.0).abs() < 1e-12);
        assert_eq!(record.history, vec![6.0]);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_file_untouched() {
        let path = temp_store_path("reject");
        let store = JsonFileStore::open(&path).await.unwrap();
        store.save_person(&person("1", "Jeff")).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = store.rate(Subject::Person(EntityId::from("1")), 0.0).await.unwrap_err();
        assert!(matches!(err, MarqueeError::InvalidRating(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_tmp_path_keeps_extension() {
        assert_eq!(tmp_path(Path::new("/data/ratings.db")), PathBuf::from("/data/ratings.db.tmp"));
        assert_eq!(tmp_path(Path::new("catalog.json")), PathBuf::from("catalog.json.tmp"));
        assert_eq!(tmp_path(Path::new("/data/catalog")), PathBuf::from("/data/catalog.tmp"));
    }

    #[tokio::test]
    async fn test_non_json_extension_written_in_place() {
        let path = temp_store_path("ext").with_file_name("ratings.db");
        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.path(), path.as_path());
        store.save_person(&person("1", "Jeff")).await.unwrap();

        let dir = path.parent().unwrap();
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["ratings.db".to_string()]);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let path = temp_store_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{ not json").unwrap();

        let err = JsonFileStore::open(&path).await.unwrap_err();
        assert!(matches!(err, MarqueeError::Serialization(_)));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
