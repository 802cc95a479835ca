use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const SLATE: Theme = Theme {
	banner: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	accent: Style::new()
		.fg(Color::Rgb(171, 139, 255))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	section: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	card_title: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.add_modifier(Modifier::BOLD),
	card_meta: Style::new().fg(Color::Rgb(148, 163, 184)),
	selection: Style::new().bg(Color::Rgb(30, 41, 59)),
	muted: Style::new().fg(Color::DarkGray),
	error: Style::new().fg(Color::Rgb(239, 68, 68)),
};

pub const LIGHT: Theme = Theme {
	banner: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	accent: Style::new()
		.fg(Color::Rgb(109, 40, 217))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	section: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	card_title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	card_meta: Style::new().fg(Color::Rgb(100, 100, 100)),
	selection: Style::new().bg(Color::Rgb(200, 200, 200)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
};
