//! Fetch lifecycle: one request in, one renderable state out.

mod controller;
mod state;

pub use controller::{FetchController, fetch_movies};
pub use state::{API_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, FetchState};
