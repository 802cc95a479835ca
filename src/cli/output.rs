use anyhow::Result;
use cinefind::{FetchState, Movie};
use serde_json::json;

const MISSING: &str = "N/A";

/// One headless line: `title (year) ★rating`.
fn plain_line(movie: &Movie) -> String {
	let year = movie.release_year().unwrap_or(MISSING);
	let rating = movie
		.vote_average
		.map(|rating| format!("{rating:.1}"))
		.unwrap_or_else(|| MISSING.to_string());
	format!("{} ({year}) ★{rating}", movie.display_title())
}

/// Print one line per movie, or the error message.
pub(crate) fn print_plain(state: &FetchState) {
	match state {
		FetchState::Loading => println!("Still loading"),
		FetchState::Failed(message) => println!("{message}"),
		FetchState::Loaded(movies) if movies.is_empty() => println!("No movies found"),
		FetchState::Loaded(movies) => {
			for movie in movies {
				println!("{}", plain_line(movie));
			}
		}
	}
}

/// Format the final fetch state as a JSON document.
pub(crate) fn format_state_json(state: &FetchState) -> Result<String> {
	let payload = match state {
		FetchState::Loading => json!({ "status": "loading" }),
		FetchState::Failed(message) => json!({
			"status": "failed",
			"message": message,
		}),
		FetchState::Loaded(movies) => json!({
			"status": "loaded",
			"movies": movies,
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(state: &FetchState) -> Result<()> {
	println!("{}", format_state_json(state)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use cinefind::fetch::FETCH_FAILED_MESSAGE;
	use serde_json::Value;

	use super::*;

	#[test]
	fn loaded_state_serializes_movies_in_order() {
		let state = FetchState::Loaded(vec![
			Movie {
				id: Some(2),
				title: Some("B".into()),
				..Movie::default()
			},
			Movie {
				id: Some(1),
				title: Some("A".into()),
				..Movie::default()
			},
		]);

		let json = format_state_json(&state).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["status"], "loaded");
		assert_eq!(value["movies"][0]["title"], "B");
		assert_eq!(value["movies"][1]["id"], 1);
	}

	#[test]
	fn plain_lines_show_title_year_and_rating() {
		let movie = Movie {
			title: Some("Heat".into()),
			release_date: Some("1995-12-15".into()),
			vote_average: Some(7.94),
			..Movie::default()
		};
		assert_eq!(plain_line(&movie), "Heat (1995) ★7.9");
		assert_eq!(plain_line(&Movie::default()), "Untitled (N/A) ★N/A");
	}

	#[test]
	fn failed_state_carries_the_message() {
		let state = FetchState::Failed(FETCH_FAILED_MESSAGE.into());
		let value: Value =
			serde_json::from_str(&format_state_json(&state).expect("json")).expect("parse");
		assert_eq!(value["status"], "failed");
		assert_eq!(value["message"], FETCH_FAILED_MESSAGE);
	}
}
