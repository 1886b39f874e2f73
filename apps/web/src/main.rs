//! DupeFinder web page: Dioxus-powered perfume dupe search.

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dupefinder=info")),
            )
            .with_target(false)
            .init();

        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default().with_menu(None).with_window(
                    WindowBuilder::new()
                        .with_title("DupeFinder")
                        .with_inner_size(LogicalSize::new(900.0, 800.0))
                        .with_resizable(true),
                ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        // Routes tracing output to the browser console
        dioxus::logger::initialize_default();
        dioxus::launch(App);
    }
}
