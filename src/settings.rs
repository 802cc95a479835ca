use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use cinefind::logging::{DEFAULT_LEVEL, LogConfig, LogTarget, default_log_file};
use cinefind::tmdb::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use cinefind::ui::theme;
use cinefind::{Theme, app_dirs};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	token: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Startup configuration handed to the fetch controller and the view.
pub struct ResolvedConfig {
	pub api: ApiConfig,
	pub theme_name: Option<String>,
	pub theme: Theme,
	pub initial_query: String,
	pub log_level: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Where logs go for this run. Interactive sessions never log to the
	/// terminal they draw on.
	pub fn log_config(&self, headless: bool) -> Result<LogConfig> {
		let target = match (&self.log_file, headless) {
			(Some(path), _) => LogTarget::File(path.clone()),
			(None, true) => LogTarget::Stderr,
			(None, false) => LogTarget::File(default_log_file()?),
		};

		Ok(LogConfig {
			level: self.log_level.clone(),
			target,
		})
	}

	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  API base URL: {}", self.api.base_url);
		println!("  API token: {}", mask_token(&self.api.token));
		println!("  Timeout: {}s", self.api.timeout.as_secs());
		println!(
			"  UI theme: {}",
			self.theme_name.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Log level: {}", self.log_level);
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (default)"),
		}
	}
}

fn mask_token(token: &str) -> String {
	let count = token.chars().count();
	if count <= 4 {
		return "****".to_string();
	}
	let visible: String = token.chars().skip(count - 4).collect();
	format!("****{visible}")
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("cinefind")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("cinefind.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(token) = cli.api_token.clone() {
			self.api.token = Some(token);
		}
		if let Some(base_url) = cli.base_url.clone() {
			self.api.base_url = Some(base_url);
		}
		if let Some(timeout) = cli.timeout {
			self.api.timeout_secs = Some(timeout);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let token = self
			.api
			.token
			.map(|token| token.trim().to_string())
			.filter(|token| !token.is_empty())
			.ok_or_else(|| {
				anyhow!("missing TMDB API token; set TMDB_API_KEY, --api-token, or api.token")
			})?;

		let base_url = self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
		let base_url =
			Url::parse(base_url).with_context(|| format!("invalid API base URL '{base_url}'"))?;
		ensure!(
			matches!(base_url.scheme(), "http" | "https"),
			"API base URL must use http or https"
		);

		let timeout = match self.api.timeout_secs {
			Some(secs) => {
				ensure!(secs > 0, "timeout must be greater than zero");
				Duration::from_secs(secs)
			}
			None => DEFAULT_TIMEOUT,
		};

		let theme = match self.ui.theme.as_deref() {
			Some(name) => match theme::by_name(name) {
				Some(theme) => theme,
				None => bail!("unknown theme: {name}"),
			},
			None => Theme::default(),
		};

		Ok(ResolvedConfig {
			api: ApiConfig {
				base_url,
				token,
				timeout,
			},
			theme_name: self.ui.theme,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			log_file: self.logging.file,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use cinefind::ui::theme::LIGHT;
	use tempfile::NamedTempFile;

	use super::*;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["cinefind", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("parse")
	}

	#[test]
	fn file_values_are_resolved() {
		let file = config_file(
			r#"
[api]
token = "file-token"
base_url = "http://localhost:9000/3"
timeout_secs = 5

[ui]
theme = "light"
initial_query = "heat"

[logging]
level = "debug"
"#,
		);
		let path = file.path().to_str().expect("utf8 path");
		let resolved = load(&cli(&["--config", path])).expect("resolve");

		assert_eq!(resolved.api.base_url.as_str(), "http://localhost:9000/3");
		assert_eq!(resolved.api.timeout, Duration::from_secs(5));
		assert_eq!(resolved.theme, LIGHT);
		assert_eq!(resolved.initial_query, "heat");
		assert_eq!(resolved.log_level, "debug");
	}

	#[test]
	fn cli_flags_override_file_values() {
		let file = config_file("[api]\ntoken = \"file-token\"\n[ui]\ninitial_query = \"heat\"\n");
		let path = file.path().to_str().expect("utf8 path");
		let resolved = load(&cli(&[
			"--config",
			path,
			"--api-token",
			"cli-token",
			"--query",
			"alien",
		]))
		.expect("resolve");

		assert_eq!(resolved.api.token, "cli-token");
		assert_eq!(resolved.initial_query, "alien");
	}

	#[test]
	fn defaults_apply_when_only_a_token_is_given() {
		let resolved = load(&cli(&["--api-token", "abc"])).expect("resolve");
		assert_eq!(resolved.api.base_url.as_str(), DEFAULT_BASE_URL);
		assert_eq!(resolved.api.timeout, DEFAULT_TIMEOUT);
		assert_eq!(resolved.theme, Theme::default());
		assert!(resolved.initial_query.is_empty());
	}

	#[test]
	fn blank_token_is_rejected() {
		let err = load(&cli(&["--api-token", "  "]))
			.err()
			.expect("missing token");
		assert!(err.to_string().contains("missing TMDB API token"));
	}

	#[test]
	fn invalid_base_url_is_rejected() {
		assert!(load(&cli(&["--api-token", "abc", "--base-url", "not a url"])).is_err());
		assert!(load(&cli(&["--api-token", "abc", "--base-url", "ftp://example.com"])).is_err());
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let err = load(&cli(&["--api-token", "abc", "--theme", "neon"]))
			.err()
			.expect("unknown theme");
		assert!(err.to_string().contains("unknown theme"));
	}

	#[test]
	fn headless_runs_log_to_stderr_unless_a_file_is_set() {
		let resolved = load(&cli(&["--api-token", "abc"])).expect("resolve");
		assert_eq!(resolved.log_config(true).expect("log").target, LogTarget::Stderr);

		let resolved =
			load(&cli(&["--api-token", "abc", "--log-file", "/tmp/cinefind-test.log"]))
				.expect("resolve");
		assert_eq!(
			resolved.log_config(true).expect("log").target,
			LogTarget::File(PathBuf::from("/tmp/cinefind-test.log"))
		);
	}

	#[test]
	fn tokens_are_masked_in_summaries() {
		assert_eq!(mask_token("abcdefgh"), "****efgh");
		assert_eq!(mask_token("abc"), "****");
	}
}
