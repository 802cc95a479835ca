use std::fmt::Write;
use std::path::PathBuf;

use cinefind::{app_dirs, logging};
use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Produce the full version banner including config and log locations.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let log_file = match logging::default_log_file() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("cinefind {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log file: {log_file}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "cinefind",
	version,
	long_version = long_version(),
	about = "Browse popular movies from The Movie Database",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `cinefind` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CINEFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "api-token",
		value_name = "TOKEN",
		env = "TMDB_API_KEY",
		hide_env_values = true,
		help = "TMDB API read access token sent as a bearer token"
	)]
	pub(crate) api_token: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Override the API base URL (default: https://api.themoviedb.org/3)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for a title instead of listing popular movies (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Fetch once and print the result instead of opening the interactive view"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: cache directory when interactive, stderr otherwise)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive, overridden by CINEFIND_LOG (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for headless runs.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_open_the_interactive_view() {
		let cli = CliArgs::try_parse_from(["cinefind", "--no-config"]).expect("parse");
		assert!(cli.no_config);
		assert_eq!(cli.output, None);
		assert!(cli.config.is_empty());
		assert_eq!(cli.initial_query, None);
	}

	#[test]
	fn headless_output_and_overrides_parse() {
		let cli = CliArgs::try_parse_from([
			"cinefind",
			"-o",
			"json",
			"--api-token",
			"secret",
			"--base-url",
			"http://localhost:8080/3",
			"-q",
			"alien",
			"-c",
			"one.toml",
			"-c",
			"two.toml",
		])
		.expect("parse");

		assert_eq!(cli.output, Some(OutputFormat::Json));
		assert_eq!(cli.api_token.as_deref(), Some("secret"));
		assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/3"));
		assert_eq!(cli.initial_query.as_deref(), Some("alien"));
		assert_eq!(cli.config.len(), 2);
	}

	#[test]
	fn unknown_output_format_is_rejected() {
		assert!(CliArgs::try_parse_from(["cinefind", "--output", "xml"]).is_err());
	}

	#[test]
	fn command_definition_is_consistent() {
		use clap::CommandFactory;
		CliArgs::command().debug_assert();
	}
}
