//! Text rendering of the search session.

use std::fmt::Write;

use crate::SearchState;

/// Renders the session as printable text.
///
/// Pure function of the controller's snapshot: the prompt line always
/// reflects the live query, a spinner line appears only while loading, the
/// "no results" line only after a completed search that produced nothing,
/// and otherwise one card per result.
pub fn render(query: &str, state: &SearchState, language: &str) -> String {
    let mut out = String::new();
    writeln!(out, "Search Wikipedia: {}", query).unwrap();

    match state {
        SearchState::Idle => {}
        SearchState::Loading => {
            writeln!(out, "Searching...").unwrap();
        }
        SearchState::Empty => {
            writeln!(out, "No results found.").unwrap();
        }
        SearchState::Results(items) => {
            for item in items {
                writeln!(out).unwrap();
                writeln!(out, "{}", item.title).unwrap();
                writeln!(out, "  {}", item.article_url(language)).unwrap();
                writeln!(out, "  {}", item.description_or_placeholder()).unwrap();
            }
        }
    }

    out
}
