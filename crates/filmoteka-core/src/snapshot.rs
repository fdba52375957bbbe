use chrono::DateTime;
use filmoteka_models::{clamp_rating, MovieRecord, WatchStatus};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// Serialize the canonical list to its JSON wire format.
pub fn encode(movies: &[MovieRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(movies)?)
}

/// Deserialize a stored snapshot, salvaging whatever is usable.
///
/// Never fails outward. A blob that is not a JSON array yields an empty
/// list; each array element is recovered field by field. A record without
/// a usable title is dropped, every other malformed field is defaulted,
/// and a duplicated id keeps only its first record.
pub fn decode(raw: &str) -> Vec<MovieRecord> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Movie snapshot is not valid JSON ({}); starting empty", e);
            return Vec::new();
        }
    };

    let items = match value {
        Value::Array(items) => items,
        other => {
            warn!(
                "Movie snapshot is {} instead of an array; starting empty",
                json_kind(&other)
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let mut seen_ids = HashSet::new();
    let mut movies = Vec::with_capacity(total);
    for item in &items {
        let record = match record_from_value(item) {
            Some(record) => record,
            None => continue,
        };
        if !seen_ids.insert(record.id.clone()) {
            warn!("Dropping snapshot record with duplicate id {}", record.id);
            continue;
        }
        movies.push(record);
    }

    if movies.len() < total {
        warn!(
            "Recovered {} of {} records from the movie snapshot",
            movies.len(),
            total
        );
    }
    movies
}

/// Salvage one snapshot entry.
///
/// `None` means the entry is unusable: not an object, or its title is
/// missing, not a string, or empty after trimming.
fn record_from_value(value: &Value) -> Option<MovieRecord> {
    let obj = value.as_object()?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(new_record_id);

    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .and_then(WatchStatus::from_label)
        .unwrap_or(WatchStatus::Planned);

    let rating = obj
        .get("rating")
        .and_then(Value::as_f64)
        .map(clamp_rating)
        .unwrap_or(0);

    let created_at = obj
        .get("createdAt")
        .and_then(Value::as_i64)
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(DateTime::UNIX_EPOCH);

    Some(MovieRecord {
        id,
        title,
        status,
        rating,
        created_at,
    })
}

/// Fresh opaque id for a new or salvaged record.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
