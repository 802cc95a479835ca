//! Single-line search box backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

use super::theme::Theme;

const PLACEHOLDER: &str = "Search through thousands of movies";

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current search term.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Forward a key press to the editor. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		self.textarea.set_placeholder_style(theme.muted_style());
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}
