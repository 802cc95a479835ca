//! Core crate exports for the `cinefind` movie browser.
//!
//! The [`tmdb`] module talks to the movie-metadata API, [`fetch`] turns a
//! request into renderable state, and [`ui`] draws that state in the terminal.

pub mod app_dirs;
pub mod fetch;
pub mod logging;
pub mod tmdb;
pub mod ui;

pub use fetch::{FetchController, FetchState, fetch_movies};
pub use tmdb::{ApiConfig, ApiError, Movie, MovieQuery, TmdbClient};
pub use ui::{App, Theme, run};
