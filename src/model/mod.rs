pub mod cache;
pub mod fetcher;

pub use cache::ModelCache;
pub use fetcher::{ModelFetcher, DEFAULT_BASE_URL};
