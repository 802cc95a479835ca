use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::state::FetchState;
use crate::tmdb::{MovieQuery, TmdbClient};

/// Issue a single request and map its outcome.
pub async fn fetch_movies(client: &TmdbClient, query: &MovieQuery) -> FetchState {
	FetchState::from_outcome(client.fetch(query).await)
}

struct InFlight {
	id: u64,
	cancel: CancellationToken,
}

struct Settled {
	id: u64,
	state: FetchState,
}

/// Drives requests on a tokio runtime and applies their results on the
/// caller's thread.
///
/// State only changes inside [`start`](Self::start) and
/// [`pump`](Self::pump)/[`settle`](Self::settle), so the UI never observes a
/// write racing with a render. Once started, the state is `Loading` exactly
/// while a request is in flight. Dropping the controller cancels whatever is
/// still in flight.
pub struct FetchController {
	client: TmdbClient,
	runtime: Handle,
	lifetime: CancellationToken,
	state: FetchState,
	query: MovieQuery,
	in_flight: Option<InFlight>,
	next_request: u64,
	updates_tx: UnboundedSender<Settled>,
	updates_rx: UnboundedReceiver<Settled>,
}

impl FetchController {
	pub fn new(client: TmdbClient, runtime: Handle) -> Self {
		let (updates_tx, updates_rx) = unbounded_channel();
		Self {
			client,
			runtime,
			lifetime: CancellationToken::new(),
			state: FetchState::Loading,
			query: MovieQuery::Discover,
			in_flight: None,
			next_request: 0,
			updates_tx,
			updates_rx,
		}
	}

	pub fn state(&self) -> &FetchState {
		&self.state
	}

	/// Query of the most recently started request.
	pub fn query(&self) -> &MovieQuery {
		&self.query
	}

	pub fn is_in_flight(&self) -> bool {
		self.in_flight.is_some()
	}

	/// Replace any in-flight request with a new one for `query`.
	pub fn start(&mut self, query: MovieQuery) {
		self.cancel();

		let id = self.next_request;
		self.next_request += 1;
		let cancel = self.lifetime.child_token();
		self.state = FetchState::Loading;
		debug!(id, ?query, "starting movie fetch");

		let client = self.client.clone();
		let tx = self.updates_tx.clone();
		let token = cancel.clone();
		let task_query = query.clone();
		self.runtime.spawn(async move {
			let state = tokio::select! {
				biased;
				_ = token.cancelled() => {
					trace!(id, "movie fetch cancelled before settling");
					return;
				}
				state = fetch_movies(&client, &task_query) => state,
			};
			if token.is_cancelled() {
				return;
			}
			let _ = tx.send(Settled { id, state });
		});

		self.in_flight = Some(InFlight { id, cancel });
		self.query = query;
	}

	/// Abort the in-flight request, if any. Its result is never applied.
	fn cancel(&mut self) {
		if let Some(in_flight) = self.in_flight.take() {
			debug!(id = in_flight.id, "cancelling movie fetch");
			in_flight.cancel.cancel();
		}
	}

	/// Apply results that settled since the last call. Returns whether the
	/// state changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		while let Ok(settled) = self.updates_rx.try_recv() {
			changed |= self.apply(settled);
		}
		changed
	}

	/// Wait for the current request to settle and return the final state.
	pub async fn settle(&mut self) -> &FetchState {
		while self.in_flight.is_some() {
			match self.updates_rx.recv().await {
				Some(settled) => {
					self.apply(settled);
				}
				None => break,
			}
		}
		&self.state
	}

	fn apply(&mut self, settled: Settled) -> bool {
		let current = self.in_flight.as_ref().map(|in_flight| in_flight.id);
		if current != Some(settled.id) {
			trace!(id = settled.id, "discarding stale movie fetch result");
			return false;
		}

		self.in_flight = None;
		self.state = settled.state;
		true
	}
}

impl Drop for FetchController {
	fn drop(&mut self) {
		self.lifetime.cancel();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use mockito::{Matcher, Server, ServerGuard};
	use serde_json::json;
	use url::Url;

	use super::*;
	use crate::fetch::FETCH_FAILED_MESSAGE;
	use crate::tmdb::{ApiConfig, Movie};

	fn controller_for(server: &ServerGuard) -> FetchController {
		let base = Url::parse(&server.url()).expect("mock url");
		let client = TmdbClient::new(&ApiConfig::new(base, "test-token")).expect("client");
		FetchController::new(client, Handle::current())
	}

	#[tokio::test]
	async fn mount_then_success_loads_the_list() {
		let mut server = Server::new_async().await;
		let _m = server
			.mock("GET", "/discover/movie")
			.match_query(Matcher::Any)
			.with_status(200)
			.with_body(json!({"results": [{"id": 1, "title": "A"}]}).to_string())
			.create_async()
			.await;

		let mut controller = controller_for(&server);
		controller.start(MovieQuery::Discover);
		assert!(controller.state().is_loading());

		let state = controller.settle().await.clone();
		let expected = Movie {
			id: Some(1),
			title: Some("A".into()),
			..Movie::default()
		};
		assert_eq!(state, FetchState::Loaded(vec![expected]));
		assert!(!controller.is_in_flight());
	}

	#[tokio::test]
	async fn mount_then_server_error_shows_generic_message() {
		let mut server = Server::new_async().await;
		let _m = server
			.mock("GET", "/discover/movie")
			.match_query(Matcher::Any)
			.with_status(500)
			.create_async()
			.await;

		let mut controller = controller_for(&server);
		controller.start(MovieQuery::Discover);
		let state = controller.settle().await;

		assert!(!state.is_loading());
		assert_eq!(state.error_message(), Some(FETCH_FAILED_MESSAGE));
		assert!(state.movies().is_empty());
	}

	#[tokio::test]
	async fn newer_request_supersedes_older_one() {
		let mut server = Server::new_async().await;
		let _discover = server
			.mock("GET", "/discover/movie")
			.match_query(Matcher::Any)
			.with_status(200)
			.with_body(json!({"results": [{"id": 1, "title": "Popular"}]}).to_string())
			.create_async()
			.await;
		let _search = server
			.mock("GET", "/search/movie")
			.match_query(Matcher::UrlEncoded("query".into(), "alien".into()))
			.with_status(200)
			.with_body(json!({"results": [{"id": 2, "title": "Alien"}]}).to_string())
			.create_async()
			.await;

		let mut controller = controller_for(&server);
		controller.start(MovieQuery::Discover);
		controller.start(MovieQuery::from_term("alien"));

		let state = controller.settle().await;
		let titles: Vec<_> = state.movies().iter().map(Movie::display_title).collect();
		assert_eq!(titles, ["Alien"]);
		assert_eq!(controller.query(), &MovieQuery::Search("alien".into()));
	}

	#[tokio::test]
	async fn unreachable_server_shows_generic_message() {
		let base = Url::parse("http://127.0.0.1:9").expect("url");
		let client = TmdbClient::new(&ApiConfig::new(base, "test-token")).expect("client");
		let mut controller = FetchController::new(client, Handle::current());
		controller.start(MovieQuery::Discover);

		let state = controller.settle().await;
		assert!(!state.is_loading());
		assert_eq!(state.error_message(), Some(FETCH_FAILED_MESSAGE));
		assert!(!controller.is_in_flight());
	}

	#[tokio::test]
	async fn cancelled_request_never_updates_state() {
		let mut server = Server::new_async().await;
		let _m = server
			.mock("GET", "/discover/movie")
			.match_query(Matcher::Any)
			.with_status(200)
			.with_body(json!({"results": [{"id": 1}]}).to_string())
			.create_async()
			.await;

		let mut controller = controller_for(&server);
		controller.start(MovieQuery::Discover);
		controller.lifetime.cancel();

		tokio::time::sleep(Duration::from_millis(100)).await;
		assert!(!controller.pump());
		assert!(controller.state().is_loading());
		assert!(controller.is_in_flight());
	}

	#[tokio::test]
	async fn loading_tracks_the_in_flight_request() {
		let mut server = Server::new_async().await;
		let _discover = server
			.mock("GET", "/discover/movie")
			.match_query(Matcher::Any)
			.with_status(200)
			.with_body(json!({"results": []}).to_string())
			.create_async()
			.await;
		let _search = server
			.mock("GET", "/search/movie")
			.match_query(Matcher::Any)
			.with_status(500)
			.create_async()
			.await;

		let mut controller = controller_for(&server);
		for query in [MovieQuery::Discover, MovieQuery::from_term("heat")] {
			controller.start(query);
			assert!(controller.state().is_loading() && controller.is_in_flight());

			controller.settle().await;
			assert!(!controller.state().is_loading() && !controller.is_in_flight());
		}
	}

	#[tokio::test]
	async fn dropping_the_controller_cancels_its_lifetime() {
		let server = Server::new_async().await;
		let mut controller = controller_for(&server);
		controller.start(MovieQuery::Discover);

		let lifetime = controller.lifetime.clone();
		let request = controller
			.in_flight
			.as_ref()
			.map(|in_flight| in_flight.cancel.clone())
			.expect("in flight");
		drop(controller);

		assert!(lifetime.is_cancelled());
		assert!(request.is_cancelled());
	}
}
