//! Fetches Base64-encoded league model blobs from a public static host,
//! decodes them, and memoizes the bytes per league code.

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{ModelCache, ModelFetcher, DEFAULT_BASE_URL};
