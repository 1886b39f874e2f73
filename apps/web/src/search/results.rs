use dioxus::prelude::*;

use crate::state::RESULTS_HTML;

/// The `#results` container. Its content is always replaced wholesale.
#[component]
pub fn Results() -> Element {
    let html = RESULTS_HTML.read().clone();

    rsx! {
        div {
            id: "results",
            class: "results",
            dangerous_inner_html: "{html}",
        }
    }
}
