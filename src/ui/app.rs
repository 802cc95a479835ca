//! Interactive view state.
//!
//! [`App`] mounts by issuing its first request; every later state change
//! arrives through the [`FetchController`] and is applied between frames.

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::cards::position_of;
use super::input::SearchInput;
use super::theme::Theme;
use crate::fetch::{FetchController, FetchState};
use crate::tmdb::MovieQuery;

pub struct App<'a> {
	/// Search box contents.
	pub search_input: SearchInput<'a>,
	pub(crate) fetch: FetchController,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_state: ListState,
	selected_key: Option<u64>,
}

impl<'a> App<'a> {
	/// Mount the view and issue its initial request.
	///
	/// A blank `initial_query` requests the popularity listing, otherwise the
	/// term is searched.
	pub fn new(mut fetch: FetchController, initial_query: &str) -> Self {
		fetch.start(MovieQuery::from_term(initial_query));

		Self {
			search_input: SearchInput::new(initial_query),
			fetch,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			list_state: ListState::default(),
			selected_key: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn state(&self) -> &FetchState {
		self.fetch.state()
	}

	/// Wait for the in-flight request and apply its result.
	pub async fn settle(&mut self) {
		self.fetch.settle().await;
		self.restore_selection();
	}

	pub(crate) fn pump_fetch_results(&mut self) {
		if self.fetch.pump() {
			self.restore_selection();
		}
	}

	/// Keep the previously selected movie selected when it is still listed.
	fn restore_selection(&mut self) {
		let movies = self.fetch.state().movies();
		let index = position_of(movies, self.selected_key)
			.or_else(|| (!movies.is_empty()).then_some(0));

		self.list_state.select(index);
		self.selected_key = index.and_then(|index| movies[index].id);
	}

	pub(crate) fn select_index(&mut self, index: usize) {
		let movies = self.fetch.state().movies();
		if movies.is_empty() {
			self.list_state.select(None);
			self.selected_key = None;
			return;
		}

		let index = index.min(movies.len() - 1);
		self.list_state.select(Some(index));
		self.selected_key = movies[index].id;
	}
}
