//! Search session state.

use crate::ResultItem;

/// The state of the search session.
///
/// A single tagged enum rather than separate loading/searched flags, so the
/// combinations that should never occur (a spinner with no search attempted,
/// a "no results" message before the first search) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search attempted yet this session.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last completed search returned these results.
    Results(Vec<ResultItem>),
    /// The last completed search returned nothing (or failed).
    Empty,
}

impl SearchState {
    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true once any search has been attempted this session.
    ///
    /// Every transition out of `Idle` is one-way: begin_search never resets
    /// the state to `Idle`, so this stays true for the rest of the session.
    pub fn searched(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns the current result list, empty unless showing results.
    pub fn results(&self) -> &[ResultItem] {
        match self {
            Self::Results(items) => items,
            _ => &[],
        }
    }
}
