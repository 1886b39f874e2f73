//! Renderable state of the results container.

use tracing::error;

use crate::client::ApiReply;
use crate::render::{self, message_html};
use crate::types::{DupeItem, QueryItem};

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listing { query: QueryItem, items: Vec<DupeItem> },
    NoMatches,
    NotFound,
    ServerError,
    FetchError,
}

/// What the results container currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// Idle, or submitted with a blank name.
    Prompt,
    Loading,
    Done(Outcome),
}

impl Outcome {
    /// Map a completed request onto what the user sees.
    ///
    /// 404 is "not found", every other non-2xx is a server error. An empty list is
    /// "no matches" whatever `query` holds; a listing whose `query` is missing or
    /// unreadable cannot be titled and counts as a fetch failure.
    pub fn from_reply(reply: ApiReply) -> Self {
        if reply.status == 404 {
            return Outcome::NotFound;
        }
        if !reply.is_success() {
            return Outcome::ServerError;
        }

        let Some(body) = reply.body else {
            return Outcome::FetchError;
        };
        if body.results.is_empty() {
            return Outcome::NoMatches;
        }
        match body.query_item() {
            Some(Ok(query)) => Outcome::Listing { query, items: body.results },
            Some(Err(e)) => {
                error!(error = %e, "dupes reply has an unreadable query object");
                Outcome::FetchError
            }
            None => {
                error!("dupes reply has results but no query object");
                Outcome::FetchError
            }
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Outcome::Listing { .. })
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Listing { .. } => None,
            Outcome::NoMatches => Some(render::NO_MATCHES_MSG),
            Outcome::NotFound => Some(render::NOT_FOUND_MSG),
            Outcome::ServerError => Some(render::SERVER_ERROR_MSG),
            Outcome::FetchError => Some(render::FETCH_ERROR_MSG),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Outcome::Listing { query, items } => render::listing_html(query, items)
                .unwrap_or_else(|e| {
                    error!(error = %e, "failed to render listing");
                    message_html(render::FETCH_ERROR_MSG)
                }),
            other => message_html(other.message().unwrap_or(render::FETCH_ERROR_MSG)),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Outcome::Listing { query, items } => render::listing_text(query, items),
            other => format!("{}\n", other.message().unwrap_or(render::FETCH_ERROR_MSG)),
        }
    }
}

impl SearchView {
    /// Full replacement content for the results container.
    pub fn to_html(&self) -> String {
        match self {
            SearchView::Prompt => message_html(render::PROMPT_MSG),
            SearchView::Loading => message_html(render::LOADING_MSG),
            SearchView::Done(outcome) => outcome.to_html(),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            SearchView::Prompt => format!("{}\n", render::PROMPT_MSG),
            SearchView::Loading => format!("{}\n", render::LOADING_MSG),
            SearchView::Done(outcome) => outcome.to_text(),
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            SearchView::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}
