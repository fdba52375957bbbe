use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the movie library.
///
/// Serializes to the storage wire format: `id`/`title`/`status`/`rating`
/// plus `createdAt` as integer milliseconds since the Unix epoch, so
/// snapshots written by earlier versions of the app hydrate unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub status: WatchStatus,
    pub rating: u8,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    /// Want to watch
    Planned,
    /// Already watched
    Watched,
}

impl WatchStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            WatchStatus::Planned => WatchStatus::Watched,
            WatchStatus::Watched => WatchStatus::Planned,
        }
    }

    /// Wire label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            WatchStatus::Planned => "planned",
            WatchStatus::Watched => "watched",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "planned" => Some(WatchStatus::Planned),
            "watched" => Some(WatchStatus::Watched),
            _ => None,
        }
    }
}

/// Clamp a parsed rating to the storable range.
///
/// Non-finite input maps to 0; everything else is clamped to [0, 10] and
/// rounded to the nearest integer.
pub fn clamp_rating(value: f64) -> u8 {
    if value.is_finite() {
        value.clamp(0.0, 10.0).round() as u8
    } else {
        0
    }
}
