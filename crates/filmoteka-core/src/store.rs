use anyhow::Result;
use chrono::{Duration, SubsecRound, Utc};
use filmoteka_config::KeyValueStore;
use filmoteka_models::{clamp_rating, Language, MovieRecord, WatchStatus};
use tracing::debug;

use crate::snapshot;

/// Storage key for the serialized movie list. The value predates this
/// implementation; keeping it lets snapshots from the original app hydrate
/// unchanged.
pub const MOVIES_KEY: &str = "mini_kinopoisk_simple_v2";
/// Storage key for the selected display language code.
pub const LANG_KEY: &str = "mini_kinopoisk_lang_v1";

/// Owner of the canonical movie list.
///
/// All mutation goes through these methods, and every state change is
/// written back to the storage collaborator before the method returns.
/// Operations are total over data-model input: absent ids, empty titles,
/// and unparseable ratings become no-ops or defaults, never errors. `Err`
/// is reserved for the storage backend itself.
pub struct MovieStore<S> {
    storage: S,
    movies: Vec<MovieRecord>,
}

impl<S: KeyValueStore> MovieStore<S> {
    /// Hydrate the list from storage.
    ///
    /// An absent key or an undecodable snapshot yields an empty list;
    /// opening never fails.
    pub fn open(storage: S) -> Self {
        let movies = storage
            .get(MOVIES_KEY)
            .map(|raw| snapshot::decode(&raw))
            .unwrap_or_default();
        Self { storage, movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Add a movie with the given title, newest first.
    ///
    /// The title is trimmed; if nothing remains the list is left untouched
    /// and nothing is persisted.
    pub fn add(&mut self, title: &str) -> Result<&[MovieRecord]> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(&self.movies);
        }

        // Timestamps persist as integer milliseconds, so mint them at that
        // precision or a storage round trip would change them. Keep createdAt
        // strictly increasing even when two adds land on the same millisecond,
        // so insertion order and Newest order agree.
        let now = Utc::now().trunc_subsecs(3);
        let created_at = match self.movies.first() {
            Some(newest) if newest.created_at >= now => newest
                .created_at
                .checked_add_signed(Duration::milliseconds(1))
                .unwrap_or(now),
            _ => now,
        };

        self.movies.insert(
            0,
            MovieRecord {
                id: snapshot::new_record_id(),
                title: title.to_string(),
                status: WatchStatus::Planned,
                rating: 0,
                created_at,
            },
        );
        debug!("Added movie {:?}", title);
        self.persist()?;
        Ok(&self.movies)
    }

    /// Remove the record with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Result<&[MovieRecord]> {
        self.movies.retain(|m| m.id != id);
        self.persist()?;
        Ok(&self.movies)
    }

    /// Flip a record between planned and watched.
    pub fn toggle_status(&mut self, id: &str) -> Result<&[MovieRecord]> {
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) {
            movie.status = movie.status.toggled();
        }
        self.persist()?;
        Ok(&self.movies)
    }

    /// Parse `raw` leniently and store the clamped rating on the record.
    ///
    /// Unparseable or non-finite input counts as 0; everything else is
    /// clamped to [0, 10] and rounded. Ratings may be set on planned
    /// records too; nothing ties a rating to the watched status.
    pub fn set_rating(&mut self, id: &str, raw: &str) -> Result<&[MovieRecord]> {
        let rating = raw.trim().parse::<f64>().map(clamp_rating).unwrap_or(0);
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) {
            movie.rating = rating;
        }
        self.persist()?;
        Ok(&self.movies)
    }

    /// Replace a record's title.
    ///
    /// The new title is trimmed; if nothing remains it is discarded and the
    /// original title kept.
    pub fn rename(&mut self, id: &str, new_title: &str) -> Result<&[MovieRecord]> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Ok(&self.movies);
        }
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) {
            movie.title = new_title.to_string();
        }
        self.persist()?;
        Ok(&self.movies)
    }

    /// Drop every record.
    pub fn clear_all(&mut self) -> Result<&[MovieRecord]> {
        debug!("Clearing {} movies", self.movies.len());
        self.movies.clear();
        self.persist()?;
        Ok(&self.movies)
    }

    fn persist(&mut self) -> Result<()> {
        let raw = snapshot::encode(&self.movies)?;
        self.storage.set(MOVIES_KEY, &raw)
    }
}

/// Read the persisted display language, defaulting when absent or unknown.
pub fn load_language<S: KeyValueStore>(storage: &S) -> Language {
    storage
        .get(LANG_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist the display language code.
pub fn save_language<S: KeyValueStore>(storage: &mut S, language: Language) -> Result<()> {
    storage.set(LANG_KEY, language.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmoteka_config::MemoryStore;
    use std::collections::HashSet;

    fn open_empty() -> MovieStore<MemoryStore> {
        MovieStore::open(MemoryStore::new())
    }

    fn id_of(store: &MovieStore<MemoryStore>, title: &str) -> String {
        store
            .movies()
            .iter()
            .find(|m| m.title == title)
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        store.add("Arrival").unwrap();

        let movies = store.movies();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Arrival");
        assert_eq!(movies[1].title, "Dune");
        assert_eq!(movies[0].status, WatchStatus::Planned);
        assert_eq!(movies[0].rating, 0);
    }

    #[test]
    fn test_add_trims_titles() {
        let mut store = open_empty();
        store.add("  Dune  ").unwrap();
        assert_eq!(store.movies()[0].title, "Dune");
    }

    #[test]
    fn test_add_empty_title_is_a_noop() {
        let storage = MemoryStore::new();
        let mut store = MovieStore::open(storage.clone());
        store.add("").unwrap();
        store.add("   ").unwrap();

        assert!(store.movies().is_empty());
        // Nothing was persisted either.
        assert_eq!(storage.get(MOVIES_KEY), None);
    }

    #[test]
    fn test_ids_stay_unique_across_operations() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        store.add("Dune").unwrap();
        store.add("Arrival").unwrap();
        let id = store.movies()[1].id.clone();
        store.toggle_status(&id).unwrap();
        store.set_rating(&id, "9").unwrap();
        store.remove(&store.movies()[0].id.clone()).unwrap();
        store.add("Solaris").unwrap();

        let ids: HashSet<&str> = store.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), store.movies().len());
    }

    #[test]
    fn test_created_at_strictly_decreases_down_the_list() {
        let mut store = open_empty();
        store.add("First").unwrap();
        store.add("Second").unwrap();
        store.add("Third").unwrap();

        let movies = store.movies();
        assert!(movies[0].created_at > movies[1].created_at);
        assert!(movies[1].created_at > movies[2].created_at);
    }

    #[test]
    fn test_persisted_created_at_stays_strictly_monotonic() {
        let storage = MemoryStore::new();
        let mut store = MovieStore::open(storage.clone());
        for i in 0..50 {
            store.add(&format!("Movie {}", i)).unwrap();
        }

        // Rapid adds tie on the wall clock, so the ordering has to hold in
        // the persisted snapshot, not just in memory.
        let persisted = snapshot::decode(&storage.get(MOVIES_KEY).unwrap());
        assert_eq!(persisted.len(), 50);
        assert!(persisted
            .windows(2)
            .all(|pair| pair[0].created_at > pair[1].created_at));
        assert_eq!(persisted.as_slice(), store.movies());
    }

    #[test]
    fn test_add_survives_snapshot_at_max_timestamp() {
        use chrono::DateTime;

        let max_ms = DateTime::<Utc>::MAX_UTC.timestamp_millis();
        let raw = format!(
            r#"[{{"id":"edge","title":"Edge","status":"planned","rating":0,"createdAt":{}}}]"#,
            max_ms
        );
        let mut storage = MemoryStore::new();
        storage.set(MOVIES_KEY, &raw).unwrap();

        let mut store = MovieStore::open(storage);
        store.add("New").unwrap();
        assert_eq!(store.movies().len(), 2);
        assert_eq!(store.movies()[0].title, "New");
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        store.add("Arrival").unwrap();
        let id = id_of(&store, "Dune");

        store.remove(&id).unwrap();
        assert_eq!(store.movies().len(), 1);
        assert_eq!(store.movies()[0].title, "Arrival");
    }

    #[test]
    fn test_remove_absent_id_is_a_noop() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        let before = store.movies().to_vec();
        store.remove("no-such-id").unwrap();
        assert_eq!(store.movies(), before.as_slice());
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        let id = id_of(&store, "Dune");

        store.toggle_status(&id).unwrap();
        assert_eq!(store.movies()[0].status, WatchStatus::Watched);
        store.toggle_status(&id).unwrap();
        assert_eq!(store.movies()[0].status, WatchStatus::Planned);
    }

    #[test]
    fn test_toggle_absent_id_is_a_noop() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        store.toggle_status("no-such-id").unwrap();
        assert_eq!(store.movies()[0].status, WatchStatus::Planned);
    }

    #[test]
    fn test_set_rating_clamps_every_kind_of_input() {
        let cases = [
            ("7", 7),
            ("  5 ", 5),
            ("7.6", 8),
            ("11", 10),
            ("-3", 0),
            ("abc", 0),
            ("", 0),
            ("inf", 0),
            ("NaN", 0),
        ];

        let mut store = open_empty();
        store.add("Dune").unwrap();
        let id = id_of(&store, "Dune");

        for (raw, expected) in cases {
            store.set_rating(&id, raw).unwrap();
            assert_eq!(store.movies()[0].rating, expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_set_rating_allowed_on_planned_records() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        let id = id_of(&store, "Dune");
        store.set_rating(&id, "6").unwrap();
        assert_eq!(store.movies()[0].status, WatchStatus::Planned);
        assert_eq!(store.movies()[0].rating, 6);
    }

    #[test]
    fn test_rename_replaces_title() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        let id = id_of(&store, "Dune");
        store.rename(&id, "  Dune: Part Two  ").unwrap();
        assert_eq!(store.movies()[0].title, "Dune: Part Two");
    }

    #[test]
    fn test_rename_empty_keeps_original_title() {
        let mut store = open_empty();
        store.add("Dune").unwrap();
        let id = id_of(&store, "Dune");
        store.rename(&id, "").unwrap();
        store.rename(&id, "   ").unwrap();
        assert_eq!(store.movies()[0].title, "Dune");
    }

    #[test]
    fn test_clear_all_empties_the_list() {
        let storage = MemoryStore::new();
        let mut store = MovieStore::open(storage.clone());
        store.add("Dune").unwrap();
        store.add("Arrival").unwrap();

        store.clear_all().unwrap();
        assert!(store.movies().is_empty());
        assert_eq!(storage.get(MOVIES_KEY), Some("[]".to_string()));
    }

    #[test]
    fn test_mutations_write_through_and_rehydrate() {
        let storage = MemoryStore::new();
        let mut store = MovieStore::open(storage.clone());
        store.add("Dune").unwrap();
        store.add("Arrival").unwrap();
        let id = id_of(&store, "Arrival");
        store.toggle_status(&id).unwrap();
        store.set_rating(&id, "9").unwrap();

        let reopened = MovieStore::open(storage);
        assert_eq!(reopened.movies(), store.movies());
    }

    #[test]
    fn test_open_with_absent_or_garbage_snapshot_is_empty() {
        let store = open_empty();
        assert!(store.movies().is_empty());

        let mut storage = MemoryStore::new();
        storage.set(MOVIES_KEY, "definitely not json").unwrap();
        let store = MovieStore::open(storage);
        assert!(store.movies().is_empty());
    }

    #[test]
    fn test_language_round_trip_and_fallback() {
        let mut storage = MemoryStore::new();
        assert_eq!(load_language(&storage), Language::Ukrainian);

        save_language(&mut storage, Language::French).unwrap();
        assert_eq!(load_language(&storage), Language::French);

        storage.set(LANG_KEY, "tlh").unwrap();
        assert_eq!(load_language(&storage), Language::Ukrainian);
    }
}
