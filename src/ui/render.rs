//! Presentation tree: header, search box, and exactly one results body.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::App;
use super::cards::movie_cards;
use super::input::SearchInput;
use super::theme::Theme;
use crate::fetch::FetchState;

const HIGHLIGHT_SYMBOL: &str = "▌ ";
const LOADING_LABEL: &str = "Loading movies...";
const KEY_HINTS: &str = "enter search • ↑/↓ browse • esc quit";

/// Everything the presentation tree reads for one frame.
pub(crate) struct Screen<'f, 'a> {
	pub state: &'f FetchState,
	pub search_input: &'f mut SearchInput<'a>,
	pub theme: &'f Theme,
	pub throbber_state: &'f mut ThrobberState,
	pub list_state: &'f mut ListState,
}

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let screen = Screen {
			state: self.fetch.state(),
			search_input: &mut self.search_input,
			theme: &self.theme,
			throbber_state: &mut self.throbber_state,
			list_state: &mut self.list_state,
		};
		draw_screen(frame, screen);
	}
}

pub(crate) fn draw_screen(frame: &mut Frame, screen: Screen<'_, '_>) {
	let area = frame.area().inner(Margin {
		vertical: 0,
		horizontal: 1,
	});

	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.split(area);

	render_banner(frame, layout[0], screen.theme);
	render_search(frame, layout[1], screen.search_input, screen.theme);
	render_section_title(frame, layout[2], screen.theme);
	render_body(
		frame,
		layout[3],
		screen.state,
		screen.theme,
		screen.throbber_state,
		screen.list_state,
	);
	render_footer(frame, layout[4], screen.state, screen.theme);
}

fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme) {
	let title = Line::from(vec![
		Span::styled("Find Your Type of ", theme.banner_style()),
		Span::styled("Movies", theme.accent_style()),
	]);
	let banner = Paragraph::new(title)
		.alignment(Alignment::Center)
		.block(Block::default().borders(Borders::BOTTOM).border_style(theme.muted_style()));
	frame.render_widget(banner, area);
}

fn render_search(frame: &mut Frame, area: Rect, input: &mut SearchInput<'_>, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt_style())
		.title(Span::styled(" Search ", theme.prompt_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	input.render(frame, inner, theme);
}

fn render_section_title(frame: &mut Frame, area: Rect, theme: &Theme) {
	frame.render_widget(Paragraph::new("All Movies").style(theme.section_style()), area);
}

fn render_body(
	frame: &mut Frame,
	area: Rect,
	state: &FetchState,
	theme: &Theme,
	throbber_state: &mut ThrobberState,
	list_state: &mut ListState,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	match state {
		FetchState::Loading => {
			let throbber = Throbber::default()
				.label(LOADING_LABEL)
				.style(theme.muted_style())
				.throbber_style(theme.accent_style());
			let line = Rect { height: 1, ..area };
			frame.render_stateful_widget(throbber, line, throbber_state);
		}
		FetchState::Failed(message) => {
			let error = Paragraph::new(message.as_str())
				.style(theme.error_style())
				.wrap(Wrap { trim: true });
			frame.render_widget(error, area);
		}
		FetchState::Loaded(movies) => {
			let list = List::new(movie_cards(movies, theme))
				.highlight_style(theme.selection_style())
				.highlight_symbol(HIGHLIGHT_SYMBOL);
			frame.render_stateful_widget(list, area, list_state);
		}
	}
}

fn render_footer(frame: &mut Frame, area: Rect, state: &FetchState, theme: &Theme) {
	let status = match state {
		FetchState::Loaded(movies) => format!("{} movies • {KEY_HINTS}", movies.len()),
		_ => KEY_HINTS.to_string(),
	};
	let footer = Paragraph::new(status)
		.alignment(Alignment::Right)
		.style(theme.muted_style());
	frame.render_widget(footer, area);
}
