use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::error::FetchError;
use crate::filters::FilterState;
use crate::query::build_query;
use crate::types::{Repository, SearchResponse};

const SEARCH_URL: &str = "https://api.github.com/search/repositories";
const USER_AGENT: &str = concat!("gitdash/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Anything that can answer a repository search for a filter state.
///
/// The dashboard talks to GitHub through this seam; tests plug in a
/// scripted double.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, state: &FilterState) -> Result<SearchResponse, FetchError>;
}

/// Blocking GitHub client.
pub struct GitHubClient {
    http: reqwest::blocking::Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(GitHubClient { http, token })
    }
}

impl SearchBackend for GitHubClient {
    fn search(&self, state: &FilterState) -> Result<SearchResponse, FetchError> {
        let query = build_query(state);
        let url = format!(
            "{}?q={}&sort={}&order={}&page={}&per_page={}",
            SEARCH_URL,
            urlencoding::encode(&query),
            state.sort_by.as_param(),
            state.order.as_param(),
            state.page,
            state.per_page,
        );
        debug!(%url, "search request");

        let mut request = self.http.get(&url).header("Accept", ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }
        response
            .json::<SearchResponse>()
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the dashboard renders: the last committed result set plus the
/// current request status. Replaced wholesale per completed request, never
/// merged across pages.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub status: FetchStatus,
    pub items: Vec<Repository>,
    pub total_count: u64,
    pub error: Option<String>,
    fetched_once: bool,
}

impl FetchState {
    pub fn new() -> Self {
        FetchState {
            status: FetchStatus::Idle,
            items: Vec::new(),
            total_count: 0,
            error: None,
            fetched_once: false,
        }
    }

    /// True only while the very first request of the session is in flight;
    /// later loads keep the previous page on screen instead of a blank one.
    pub fn is_initial_load(&self) -> bool {
        self.status == FetchStatus::Loading && !self.fetched_once
    }

    fn begin_load(&mut self) {
        // Keep items/total_count so a page turn does not blank the list.
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    fn complete(&mut self, response: SearchResponse) {
        self.items = response.items;
        self.total_count = response.total_count;
        self.error = None;
        self.status = FetchStatus::Success;
        self.fetched_once = true;
    }

    fn fail(&mut self, message: String) {
        // Stale-but-valid items stay visible next to the error.
        self.error = Some(message);
        self.status = FetchStatus::Error;
    }
}

impl Default for FetchState {
    fn default() -> Self {
        FetchState::new()
    }
}

/// A finished request, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<SearchResponse, FetchError>,
}

/// Runs one logical search request at a time against the current filters.
///
/// Every [`dispatch`](Self::dispatch) bumps a generation counter and spawns
/// a worker thread; the worker reports back through the `deliver` callback
/// (the dashboard feeds these into its event channel). A superseded
/// request's outcome still arrives, but [`commit`](Self::commit) rejects
/// any generation other than the latest issued, so responses land in
/// issuance order or not at all.
pub struct Orchestrator<B: SearchBackend> {
    backend: Arc<B>,
    deliver: Arc<dyn Fn(FetchOutcome) + Send + Sync>,
    generation: u64,
    pub state: FetchState,
}

impl<B: SearchBackend> Orchestrator<B> {
    pub fn new<F>(backend: B, deliver: F) -> Self
    where
        F: Fn(FetchOutcome) + Send + Sync + 'static,
    {
        Orchestrator {
            backend: Arc::new(backend),
            deliver: Arc::new(deliver),
            generation: 0,
            state: FetchState::new(),
        }
    }

    /// Starts a request for `filters`. Any request still in flight is
    /// implicitly superseded. Manual retry is a dispatch with unchanged
    /// filters.
    pub fn dispatch(&mut self, filters: &FilterState) {
        self.generation += 1;
        let generation = self.generation;
        debug!(generation, page = filters.page, "dispatching search");
        self.state.begin_load();

        let backend = Arc::clone(&self.backend);
        let deliver = Arc::clone(&self.deliver);
        let filters = filters.clone();
        thread::spawn(move || {
            let result = backend.search(&filters);
            deliver(FetchOutcome { generation, result });
        });
    }

    /// Applies a finished request to the state. Returns false (leaving the
    /// state untouched) when the outcome is stale.
    pub fn commit(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "discarding superseded response"
            );
            return false;
        }
        match outcome.result {
            Ok(response) => self.state.complete(response),
            Err(err) => self.state.fail(err.to_string()),
        }
        true
    }
}
