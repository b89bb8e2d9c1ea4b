//! Search session orchestration.

use tracing::{debug, warn};

use crate::{Result, ResultItem, SearchBackend, SearchState, RESULT_LIMIT};

/// Handle for one dispatched search request.
///
/// Issued by [`SearchController::begin_search`] and redeemed by
/// [`SearchController::finish_search`]. The generation stamp lets the
/// controller discard completions from requests that a newer submission has
/// superseded.
#[derive(Debug)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// Returns the query text captured at dispatch time.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Drives the search cycle: owns the query text and session state, talks to
/// a [`SearchBackend`], and folds each outcome back into the state.
pub struct SearchController<B> {
    backend: B,
    query: String,
    state: SearchState,
    generation: u64,
}

impl<B: SearchBackend> SearchController<B> {
    /// Creates an idle controller over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            query: String::new(),
            state: SearchState::Idle,
            generation: 0,
        }
    }

    /// Returns the current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current session state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Replaces the query text verbatim. No trimming, no validation.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Starts a search for the current query.
    ///
    /// Returns `None` without any state change when the query is the empty
    /// string. Otherwise enters `Loading`, bumps the request generation, and
    /// hands back a ticket capturing the query to send.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = SearchState::Loading;
        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of a dispatched search.
    ///
    /// A ticket from a superseded dispatch is discarded: the latest
    /// `begin_search` wins regardless of completion order. For the current
    /// ticket the state always leaves `Loading`, failure included. Errors are
    /// logged and rendered the same as zero results.
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: Result<Vec<ResultItem>>) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded search response"
            );
            return;
        }

        self.state = match outcome {
            Ok(items) if !items.is_empty() => SearchState::Results(items),
            Ok(_) => SearchState::Empty,
            Err(e) => {
                warn!(query = %ticket.query, error = %e, "search failed");
                SearchState::Empty
            }
        };
    }

    /// Runs one full submit cycle: dispatch, await, apply.
    ///
    /// A no-op when the query is empty. Never fails; request errors end up
    /// as the `Empty` state.
    pub async fn submit(&mut self) {
        let Some(ticket) = self.begin_search() else {
            return;
        };

        let outcome = self.backend.search(ticket.query(), RESULT_LIMIT).await;
        self.finish_search(ticket, outcome);
    }
}
