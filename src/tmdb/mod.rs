//! Client for The Movie Database (TMDB) v3 API.

mod client;
mod error;
mod types;

pub use client::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MovieQuery, TmdbClient};
pub use error::ApiError;
pub use types::{API_FAILURE_MARKER, DiscoverResponse, Movie};
