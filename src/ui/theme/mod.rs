mod builtins;

use ratatui::style::Style;

pub use builtins::{LIGHT, SLATE};

/// Palette used by the interactive view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub banner: Style,
	pub accent: Style,
	pub prompt: Style,
	pub section: Style,
	pub card_title: Style,
	pub card_meta: Style,
	pub selection: Style,
	pub muted: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn banner_style(&self) -> Style {
		self.banner
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn section_style(&self) -> Style {
		self.section
	}

	#[must_use]
	pub fn card_title_style(&self) -> Style {
		self.card_title
	}

	#[must_use]
	pub fn card_meta_style(&self) -> Style {
		self.card_meta
	}

	#[must_use]
	pub fn selection_style(&self) -> Style {
		self.selection
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

const BUILT_IN: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Names of the bundled themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILT_IN
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}
