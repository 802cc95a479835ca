use tracing::warn;

use crate::tmdb::{ApiError, DiscoverResponse, Movie};

/// Message shown for transport failures, bad statuses, and unreadable bodies.
pub const FETCH_FAILED_MESSAGE: &str = "Error Fetching Movies. Please try again later.";
/// Message shown when the API flags a failure without explaining it.
pub const API_FAILED_MESSAGE: &str = "Failed to fetch movies.";

/// Result of the most recent fetch attempt.
///
/// Exactly one variant is live at a time, so a loading indicator can never be
/// shown together with an error or a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
	#[default]
	Loading,
	Failed(String),
	Loaded(Vec<Movie>),
}

impl FetchState {
	/// Map a settled request onto the state the UI renders.
	pub fn from_outcome(outcome: Result<DiscoverResponse, ApiError>) -> Self {
		match outcome {
			Ok(payload) => Self::from_payload(payload),
			Err(err) => {
				warn!("Error Fetching Movies: {err}");
				Self::Failed(FETCH_FAILED_MESSAGE.to_string())
			}
		}
	}

	/// Map a decoded payload, honouring the API's own failure marker.
	pub fn from_payload(payload: DiscoverResponse) -> Self {
		if payload.is_api_failure() {
			let message = payload
				.error_message()
				.unwrap_or_else(|| API_FAILED_MESSAGE.to_string());
			return Self::Failed(message);
		}

		Self::Loaded(payload.results.unwrap_or_default())
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Failed(message) => Some(message),
			_ => None,
		}
	}

	/// Movies to render; empty while loading or after a failure.
	pub fn movies(&self) -> &[Movie] {
		match self {
			Self::Loaded(movies) => movies,
			_ => &[],
		}
	}
}
