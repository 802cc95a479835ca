//! Response shapes returned by the TMDB v3 API.
//!
//! Records are treated as opaque: every known display field is optional, a
//! field of an unexpected type reads as absent, and anything else the API
//! sends is kept verbatim in [`Movie::extra`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Marker value the API uses in its `Response` field to flag a logical failure.
pub const API_FAILURE_MARKER: &str = "False";

/// A single movie record as returned by the discovery or search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub id: Option<u64>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub title: Option<String>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub original_language: Option<String>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub release_date: Option<String>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub vote_average: Option<f64>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub overview: Option<String>,
	#[serde(
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub poster_path: Option<String>,
	/// Fields the client does not interpret.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Movie {
	/// Title to display, falling back to a placeholder when the record has none.
	#[must_use]
	pub fn display_title(&self) -> &str {
		self.title.as_deref().unwrap_or("Untitled")
	}

	/// Four-digit release year, when the release date carries one.
	#[must_use]
	pub fn release_year(&self) -> Option<&str> {
		let date = self.release_date.as_deref()?;
		let year = date.get(..4)?;
		year.chars().all(|ch| ch.is_ascii_digit()).then_some(year)
	}
}

/// Top-level payload of the discovery and search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiscoverResponse {
	#[serde(default, deserialize_with = "lenient_results")]
	pub results: Option<Vec<Movie>>,
	#[serde(default, rename = "Response")]
	pub response: Option<Value>,
	#[serde(default, rename = "Error")]
	pub error: Option<Value>,
}

impl DiscoverResponse {
	/// Whether the payload reports an API-level failure despite a 2xx status.
	#[must_use]
	pub fn is_api_failure(&self) -> bool {
		matches!(&self.response, Some(Value::String(marker)) if marker == API_FAILURE_MARKER)
	}

	/// The API's own failure text. Empty, null, `false` and zero count as
	/// missing; any other non-string value is rendered as JSON text.
	#[must_use]
	pub fn error_message(&self) -> Option<String> {
		match self.error.as_ref()? {
			Value::Null | Value::Bool(false) => None,
			Value::String(message) if message.is_empty() => None,
			Value::String(message) => Some(message.clone()),
			Value::Number(number) if number.as_f64() == Some(0.0) => None,
			other => Some(other.to_string()),
		}
	}
}

/// Decode a field, reading a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).ok())
}

/// Decode `results` entry by entry so one odd record never drops the list.
/// Entries that are not objects become empty records.
fn lenient_results<'de, D>(deserializer: D) -> Result<Option<Vec<Movie>>, D::Error>
where
	D: Deserializer<'de>,
{
	let Value::Array(entries) = Value::deserialize(deserializer)? else {
		return Ok(None);
	};
	let movies: Vec<Movie> = entries
		.into_iter()
		.map(|entry| serde_json::from_value(entry).unwrap_or_default())
		.collect();
	Ok(Some(movies))
}
