use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use super::theme::Theme;
use crate::tmdb::Movie;

const MISSING: &str = "N/A";

/// Metadata line shown under a card's title: rating, language, year.
pub fn meta_line(movie: &Movie) -> String {
	let rating = movie
		.vote_average
		.map(|rating| format!("★ {rating:.1}"))
		.unwrap_or_else(|| format!("★ {MISSING}"));
	let language = movie.original_language.as_deref().unwrap_or(MISSING);
	let year = movie.release_year().unwrap_or(MISSING);
	format!("{rating} • {language} • {year}")
}

/// Build one two-line list item per movie, preserving response order.
pub fn movie_cards<'a>(movies: &'a [Movie], theme: &Theme) -> Vec<ListItem<'a>> {
	movies
		.iter()
		.map(|movie| {
			ListItem::new(vec![
				Line::from(Span::styled(movie.display_title(), theme.card_title_style())),
				Line::from(Span::styled(meta_line(movie), theme.card_meta_style())),
			])
		})
		.collect()
}

/// Position of the movie with `key` in `movies`.
pub fn position_of(movies: &[Movie], key: Option<u64>) -> Option<usize> {
	let key = key?;
	movies.iter().position(|movie| movie.id == Some(key))
}
