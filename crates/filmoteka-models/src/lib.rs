pub mod language;
pub mod movie;
pub mod sort;

pub use language::Language;
pub use movie::{clamp_rating, MovieRecord, WatchStatus};
pub use sort::SortMode;
