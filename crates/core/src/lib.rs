//! DupeFinder: client for a perfume dupe search service.
//!
//! Turns a search form into a `/dupes` request and the JSON answer into result
//! cards or a status message. Front-ends (the `dupes` CLI, the web app) supply a
//! [`handler::ResultsContainer`] and drive [`handler::SubmitHandler`].
//!
//! # Modules
//!
//! - [`types`]: Form values, request parameters, response payload
//! - [`params`]: Form validation and query-string encoding
//! - [`client`]: [`client::DupeApi`] seam and the reqwest client
//! - [`view`]: Render states and status-to-outcome mapping
//! - [`render`]: HTML cards, terminal listing, static messages
//! - [`handler`]: One submission from validation to final render
//! - [`config`]: `.dupefinder.toml` loading

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod params;
pub mod render;
pub mod types;
pub mod view;

pub use client::{ApiReply, DupeApi, HttpDupeClient};
pub use config::{load_config, ClientConfig};
pub use error::FetchError;
pub use handler::{ResultsContainer, SubmitHandler};
pub use types::{DupeItem, DupeParams, DupeResponse, QueryItem, SearchForm};
pub use view::{Outcome, SearchView};
