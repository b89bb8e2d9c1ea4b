//! # wikisearch
//!
//! A small client for the Wikipedia title search REST API.
//!
//! The crate is built around three pieces:
//!
//! - [`WikiClient`], which issues the actual HTTP request
//! - [`SearchController`], which owns the query text and search state and
//!   drives the submit/complete cycle
//! - [`render`], a pure function from controller state to printable text
//!
//! ## Example
//!
//! ```rust,no_run
//! use wikisearch::{SearchController, WikiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut controller = SearchController::new(WikiClient::new());
//!     controller.update_query("Albert Einstein");
//!     controller.submit().await;
//!
//!     println!("{}", wikisearch::render(controller.query(), controller.state(), "en"));
//!     Ok(())
//! }
//! ```

mod backend;
mod client;
mod controller;
mod error;
mod render;
mod result;
mod state;

pub use backend::SearchBackend;
pub use client::WikiClient;
pub use controller::{SearchController, SearchTicket};
pub use error::{Result, SearchError};
pub use render::render;
pub use result::{ResultItem, NO_DESCRIPTION_PLACEHOLDER, RESULT_LIMIT};
pub use state::SearchState;
