mod cli;
mod settings;

use anyhow::{Context, Result};
use cinefind::ui::theme;
use cinefind::{FetchController, FetchState, MovieQuery, TmdbClient, logging, ui};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tokio::runtime::Runtime;
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved.log_config(cli.output.is_some())?)?;
	info!(version = env!("CARGO_PKG_VERSION"), "cinefind starting");

	let runtime = tokio::runtime::Builder::new_multi_thread()
		.worker_threads(1)
		.thread_name("cinefind-fetch")
		.enable_all()
		.build()
		.context("failed to start async runtime")?;
	let client = TmdbClient::new(&resolved.api).context("failed to configure API client")?;
	let fetch = FetchController::new(client, runtime.handle().clone());

	match cli.output {
		Some(format) => run_headless(&runtime, fetch, format, &resolved),
		None => run_interactive(fetch, resolved),
	}
}

/// Fetch once and print the settled state in the chosen format.
fn run_headless(
	runtime: &Runtime,
	mut fetch: FetchController,
	format: OutputFormat,
	settings: &ResolvedConfig,
) -> Result<()> {
	let state: FetchState = runtime.block_on(async {
		fetch.start(MovieQuery::from_term(&settings.initial_query));
		fetch.settle().await.clone()
	});

	match format {
		OutputFormat::Plain => print_plain(&state),
		OutputFormat::Json => print_json(&state)?,
	}

	Ok(())
}

fn run_interactive(fetch: FetchController, settings: ResolvedConfig) -> Result<()> {
	ui::run(fetch, &settings.initial_query, settings.theme)
}
