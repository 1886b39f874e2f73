//! Global page state and the search handler.

use dioxus::prelude::*;
use dupefinder_core::{ClientConfig, HttpDupeClient, ResultsContainer, SubmitHandler};

/// Inner HTML of the `#results` container. Empty while idle.
pub static RESULTS_HTML: GlobalSignal<String> = Signal::global(String::new);

/// Writes handler output into [`RESULTS_HTML`], replacing whatever was there.
pub struct ResultsSignal;

impl ResultsContainer for ResultsSignal {
    fn replace(&self, html: String) {
        *RESULTS_HTML.write() = html;
    }
}

/// Form defaults and API origin.
///
/// In the browser the API is served from the page's own origin; on desktop it
/// comes from `.dupefinder.toml` / `DUPEFINDER_URL`.
pub fn client_config() -> ClientConfig {
    #[cfg(feature = "desktop")]
    {
        match std::env::current_dir() {
            Ok(cwd) => dupefinder_core::load_config(&cwd),
            Err(_) => ClientConfig::default(),
        }
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(base_url) => ClientConfig { base_url, ..ClientConfig::default() },
            None => ClientConfig::default(),
        }
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        ClientConfig::default()
    }
}

/// Build the handler for `config`, or `None` if its base URL is unusable.
pub fn build_handler(config: &ClientConfig) -> Option<SubmitHandler<HttpDupeClient>> {
    match HttpDupeClient::new(&config.base_url) {
        Ok(client) => Some(SubmitHandler::new(client)),
        Err(e) => {
            tracing::error!(base_url = config.base_url.as_str(), error = %e, "invalid API origin");
            None
        }
    }
}
