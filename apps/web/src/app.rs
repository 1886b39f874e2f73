//! Root application component.

use dioxus::prelude::*;

use crate::search::{Results, SearchForm};

#[component]
pub fn App() -> Element {
    rsx! {
        div {
            class: "app-shell",

            header {
                class: "titlebar",
                h1 { class: "titlebar-title", "Perfume Dupe Finder" }
            }

            main {
                class: "content-area",
                SearchForm {}
                Results {}
            }
        }
    }
}
