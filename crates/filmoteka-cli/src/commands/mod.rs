pub mod clear;
pub mod lang;
pub mod library;
pub mod list;
pub mod prompts;

use color_eyre::Result;
use filmoteka_config::{FileStore, PathManager};
use filmoteka_core::MovieStore;
use filmoteka_models::MovieRecord;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No movie matches id '{0}'")]
    NotFound(String),
    #[error("Id '{0}' matches {1} movies, use more characters")]
    Ambiguous(String, usize),
}

/// Open the backing store file in its default location.
pub fn open_storage() -> Result<FileStore> {
    let path_manager = PathManager::default();
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create data directories: {}", e))?;
    let storage = FileStore::open(path_manager.store_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open the movie list: {}", e))?;
    debug!("Using store file {}", storage.path().display());
    Ok(storage)
}

/// Open the movie library from the default store file.
pub fn open_library() -> Result<MovieStore<FileStore>> {
    Ok(MovieStore::open(open_storage()?))
}

/// Resolve a user-supplied id against the list, accepting any unambiguous
/// prefix of a full id.
pub fn resolve_id(movies: &[MovieRecord], given: &str) -> Result<String, LookupError> {
    let given = given.trim();
    if given.is_empty() {
        return Err(LookupError::NotFound(given.to_string()));
    }
    if let Some(exact) = movies.iter().find(|m| m.id == given) {
        return Ok(exact.id.clone());
    }

    let matches: Vec<&MovieRecord> = movies.iter().filter(|m| m.id.starts_with(given)).collect();
    match matches.as_slice() {
        [only] => Ok(only.id.clone()),
        [] => Err(LookupError::NotFound(given.to_string())),
        many => Err(LookupError::Ambiguous(given.to_string(), many.len())),
    }
}

/// Shorten a full id for display.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use filmoteka_models::WatchStatus;

    fn create_movie(id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            status: WatchStatus::Planned,
            rating: 0,
            created_at: DateTime::from_timestamp_millis(0).unwrap(),
        }
    }

    #[test]
    fn test_resolve_exact_id() {
        let movies = vec![create_movie("abcd-1", "Dune"), create_movie("abcd-2", "Arrival")];
        assert_eq!(resolve_id(&movies, "abcd-2").unwrap(), "abcd-2");
    }

    #[test]
    fn test_resolve_unique_prefix() {
        let movies = vec![create_movie("7f3a9c12", "Dune"), create_movie("b28e4d01", "Arrival")];
        assert_eq!(resolve_id(&movies, "7f").unwrap(), "7f3a9c12");
        assert_eq!(resolve_id(&movies, "  b28e  ").unwrap(), "b28e4d01");
    }

    #[test]
    fn test_resolve_rejects_ambiguous_prefix() {
        let movies = vec![create_movie("7f3a9c12", "Dune"), create_movie("7f8b4d01", "Arrival")];
        assert!(matches!(
            resolve_id(&movies, "7f"),
            Err(LookupError::Ambiguous(_, 2))
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_and_empty_ids() {
        let movies = vec![create_movie("7f3a9c12", "Dune")];
        assert!(matches!(resolve_id(&movies, "zz"), Err(LookupError::NotFound(_))));
        assert!(matches!(resolve_id(&movies, ""), Err(LookupError::NotFound(_))));
        assert!(matches!(resolve_id(&[], "7f"), Err(LookupError::NotFound(_))));
    }

    #[test]
    fn test_short_id_handles_short_input() {
        assert_eq!(short_id("7f3a9c12-aaaa"), "7f3a9c12");
        assert_eq!(short_id("7f"), "7f");
    }
}
