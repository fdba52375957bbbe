pub mod snapshot;
pub mod store;
pub mod view;

pub use store::{load_language, save_language, MovieStore, LANG_KEY, MOVIES_KEY};
pub use view::{project, status_counts, Projection, StatusCounts};
