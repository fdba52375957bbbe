use filmoteka_models::{MovieRecord, SortMode, WatchStatus};

/// A filtered, sorted, partitioned view of the movie list.
///
/// Projection is pure: it never touches storage and never reorders the
/// canonical list it reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub planned: Vec<MovieRecord>,
    pub watched: Vec<MovieRecord>,
}

/// Per-status totals over the whole list, ignoring any search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub planned: usize,
    pub watched: usize,
}

/// Filter by case-insensitive substring, sort, and split by status.
///
/// Ties under the sort key keep their relative order from `movies`, so
/// equal ratings still read newest first.
pub fn project(movies: &[MovieRecord], search: &str, sort: SortMode) -> Projection {
    let query = search.trim().to_lowercase();

    let mut filtered: Vec<MovieRecord> = movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(query.as_str()))
        .cloned()
        .collect();

    match sort {
        SortMode::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::TitleAsc => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortMode::RatingDesc => filtered.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    let (planned, watched) = filtered
        .into_iter()
        .partition(|m| m.status == WatchStatus::Planned);

    Projection { planned, watched }
}

/// Count planned and watched records over the unfiltered list.
pub fn status_counts(movies: &[MovieRecord]) -> StatusCounts {
    let planned = movies
        .iter()
        .filter(|m| m.status == WatchStatus::Planned)
        .count();
    StatusCounts {
        planned,
        watched: movies.len() - planned,
    }
}
