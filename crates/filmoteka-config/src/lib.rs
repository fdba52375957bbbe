pub mod paths;
pub mod store;

pub use paths::PathManager;
pub use store::{FileStore, KeyValueStore, MemoryStore};
