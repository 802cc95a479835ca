use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use super::App;
use super::actions::Flow;
use super::theme::Theme;
use crate::fetch::FetchController;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Mount an [`App`] for `fetch` and run it until the user quits.
pub fn run(fetch: FetchController, initial_query: &str, theme: Theme) -> Result<()> {
	let mut app = App::new(fetch, initial_query);
	app.set_theme(theme);
	app.run()
}

impl<'a> App<'a> {
	/// Take over the terminal and pump events until the user exits.
	///
	/// The terminal is restored on every exit path, including errors.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		info!("interactive session started");

		let result = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| self.event_loop(&mut terminal));

		ratatui::restore();
		info!("interactive session ended");
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
		loop {
			self.pump_fetch_results();
			self.throbber_state.calc_next();
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(INPUT_POLL)? {
				continue;
			}

			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if self.handle_key(key) == Flow::Exit {
						debug!("exit requested");
						return Ok(());
					}
				}
				Event::Resize(width, height) => debug!(width, height, "terminal resized"),
				_ => {}
			}
		}
	}
}
