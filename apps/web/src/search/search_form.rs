//! The search form: name, price cap, result count and the cheaper-only toggle.

use dioxus::prelude::*;

use dupefinder_core::render::{message_html, FETCH_ERROR_MSG};
use dupefinder_core::SearchForm as FormValues;

use crate::state::{build_handler, client_config, ResultsSignal, RESULTS_HTML};

#[component]
pub fn SearchForm() -> Element {
    let config = use_hook(client_config);
    let handler = use_hook(|| build_handler(&config));

    let defaults = config.form("");
    let mut name = use_signal(|| defaults.name.clone());
    let mut price_cap = use_signal(|| defaults.price_cap.clone());
    let mut top_k = use_signal(|| defaults.top_k.clone());
    let mut cheaper_only = use_signal(|| defaults.cheaper_only);

    rsx! {
        form {
            id: "search-form",
            class: "search-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();

                let form = FormValues {
                    name: name(),
                    price_cap: price_cap(),
                    top_k: top_k(),
                    cheaper_only: cheaper_only(),
                };

                let Some(handler) = handler.clone() else {
                    *RESULTS_HTML.write() = message_html(FETCH_ERROR_MSG);
                    return;
                };

                // Each submission runs independently; the last one to finish wins
                spawn(async move {
                    handler.submit(&form, &ResultsSignal).await;
                });
            },

            input {
                id: "search-input",
                class: "search-input",
                r#type: "text",
                placeholder: "Enter a perfume you like...",
                value: "{name}",
                autofocus: true,
                oninput: move |e: Event<FormData>| name.set(e.value()),
            }

            label {
                class: "search-option",
                "Max price (£)"
                input {
                    id: "price-cap",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{price_cap}",
                    oninput: move |e: Event<FormData>| price_cap.set(e.value()),
                }
            }

            label {
                class: "search-option",
                "Results"
                input {
                    id: "top-k",
                    r#type: "number",
                    min: "1",
                    max: "50",
                    value: "{top_k}",
                    oninput: move |e: Event<FormData>| top_k.set(e.value()),
                }
            }

            label {
                class: "search-option",
                input {
                    id: "cheaper-only",
                    r#type: "checkbox",
                    checked: cheaper_only(),
                    onchange: move |e: Event<FormData>| cheaper_only.set(e.checked()),
                }
                "Cheaper than the original"
            }

            button { r#type: "submit", class: "search-submit", "Find dupes" }
        }
    }
}
