//! Submit handler: one form submission from validation to the final render.
//!
//! Every write fully replaces the container. Submissions are independent; when two
//! overlap, whichever request resolves last overwrites the other.

use tracing::{error, info};

use crate::client::DupeApi;
use crate::types::SearchForm;
use crate::view::{Outcome, SearchView};

/// The element results are written into.
pub trait ResultsContainer {
    /// Replace the whole content with `html`.
    fn replace(&self, html: String);
}

/// Runs submissions against a [`DupeApi`].
#[derive(Debug, Clone)]
pub struct SubmitHandler<A> {
    api: A,
}

impl<A: DupeApi> SubmitHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Handle one submission and return the state left in `container`.
    ///
    /// A blank name writes the prompt and makes no request. Transport and decode
    /// failures are logged and shown only as the generic fetch error.
    pub async fn submit<C: ResultsContainer + ?Sized>(
        &self,
        form: &SearchForm,
        container: &C,
    ) -> SearchView {
        let Some(params) = form.to_params() else {
            let view = SearchView::Prompt;
            container.replace(view.to_html());
            return view;
        };

        container.replace(SearchView::Loading.to_html());
        info!(name = params.name.as_str(), top_k = params.top_k.as_str(), "searching dupes");

        let outcome = match self.api.fetch_dupes(&params).await {
            Ok(reply) => Outcome::from_reply(reply),
            Err(e) => {
                error!(error = %e, "dupe search failed");
                Outcome::FetchError
            }
        };

        let view = SearchView::Done(outcome);
        container.replace(view.to_html());
        view
    }

    /// Like [`submit`](Self::submit), but a cheaper-only search that matches nothing
    /// is repeated once without the cheaper filter. The flag reports whether that happened.
    pub async fn submit_or_widen<C: ResultsContainer + ?Sized>(
        &self,
        form: &SearchForm,
        container: &C,
    ) -> (SearchView, bool) {
        let view = self.submit(form, container).await;
        if form.cheaper_only && view.outcome() == Some(&Outcome::NoMatches) {
            info!(name = form.name.trim(), "no cheaper matches, widening search");
            return (self.submit(&form.widened(), container).await, true);
        }
        (view, false)
    }
}
