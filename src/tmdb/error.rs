use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised while talking to the movie-metadata API.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("API token contains characters that are not valid in a header")]
	InvalidToken,
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("unexpected HTTP status {0}")]
	Status(StatusCode),
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
}
