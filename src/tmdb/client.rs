use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use super::error::ApiError;
use super::types::DiscoverResponse;

/// Public TMDB v3 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection parameters resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
	pub base_url: Url,
	pub token: String,
	pub timeout: Duration,
}

impl ApiConfig {
	pub fn new(base_url: Url, token: impl Into<String>) -> Self {
		Self {
			base_url,
			token: token.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Which listing to request from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
	/// Popular movies, ordered by descending popularity.
	Discover,
	/// Free-text title search.
	Search(String),
}

impl MovieQuery {
	/// Build a query from user input; blank input falls back to discovery.
	pub fn from_term(term: &str) -> Self {
		let trimmed = term.trim();
		if trimmed.is_empty() {
			Self::Discover
		} else {
			Self::Search(trimmed.to_string())
		}
	}

	fn path(&self) -> &'static str {
		match self {
			Self::Discover => "discover/movie",
			Self::Search(_) => "search/movie",
		}
	}

	fn params(&self) -> Vec<(&'static str, &str)> {
		match self {
			Self::Discover => vec![("sort_by", "popularity.desc")],
			Self::Search(term) => vec![("query", term.as_str())],
		}
	}
}

/// Thin wrapper over [`reqwest::Client`] carrying the bearer token.
#[derive(Debug, Clone)]
pub struct TmdbClient {
	http: reqwest::Client,
	base_url: String,
}

impl TmdbClient {
	pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
		let http = reqwest::Client::builder()
			.timeout(config.timeout)
			.default_headers(default_headers(&config.token)?)
			.build()
			.map_err(ApiError::Client)?;

		Ok(Self {
			http,
			base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
		})
	}

	fn endpoint(&self, query: &MovieQuery) -> String {
		format!("{}/{}", self.base_url, query.path())
	}

	/// Issue a single GET for `query` and decode the payload.
	pub async fn fetch(&self, query: &MovieQuery) -> Result<DiscoverResponse, ApiError> {
		let url = self.endpoint(query);
		debug!(%url, ?query, "requesting movies");

		let response = self.http.get(&url).query(&query.params()).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status(status));
		}

		let body = response.text().await?;
		let payload = serde_json::from_str(&body)?;
		debug!(%status, bytes = body.len(), "movies response received");
		Ok(payload)
	}
}

fn default_headers(token: &str) -> Result<HeaderMap, ApiError> {
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

	let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
		.map_err(|_| ApiError::InvalidToken)?;
	bearer.set_sensitive(true);
	headers.insert(AUTHORIZATION, bearer);

	Ok(headers)
}
