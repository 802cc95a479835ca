use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::tmdb::MovieQuery;

const PAGE_STEP: usize = 5;

/// Whether the event loop should keep running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Esc => return Flow::Exit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Flow::Exit;
			}
			KeyCode::Enter => self.submit_search(),
			KeyCode::Up => self.move_selection_by(-1),
			KeyCode::Down => self.move_selection_by(1),
			KeyCode::PageUp => self.move_selection_by(-(PAGE_STEP as isize)),
			KeyCode::PageDown => self.move_selection_by(PAGE_STEP as isize),
			KeyCode::Home => self.select_index(0),
			KeyCode::End => {
				let last = self.fetch.state().movies().len().saturating_sub(1);
				self.select_index(last);
			}
			_ => {
				self.search_input.input(key);
			}
		}
		Flow::Continue
	}

	/// Re-issue the request for the current search term.
	fn submit_search(&mut self) {
		let query = MovieQuery::from_term(self.search_input.text());
		self.fetch.start(query);
	}

	fn move_selection_by(&mut self, delta: isize) {
		let len = self.fetch.state().movies().len();
		if len == 0 {
			return;
		}
		let current = self.list_state.selected().unwrap_or(0);
		let target = current.saturating_add_signed(delta).min(len - 1);
		self.select_index(target);
	}
}
