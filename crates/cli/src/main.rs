//! DupeFinder CLI: find cheaper perfume alternatives from the terminal.
//!
//! Runs the same submit pipeline as the web page against a dupe search service.

use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::process::ExitCode;
use tracing::debug;

use dupefinder_core::{
    load_config, ClientConfig, HttpDupeClient, Outcome, ResultsContainer, SearchView,
    SubmitHandler,
};

/// DupeFinder CLI: perfume dupe search from the terminal.
#[derive(Parser)]
#[command(name = "dupes", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API origin (default: .dupefinder.toml, $DUPEFINDER_URL, or http://127.0.0.1:5000)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Output the raw JSON reply instead of human-readable text
    #[arg(long, global = true, conflicts_with = "html")]
    json: bool,

    /// Output the HTML fragment the web page would show
    #[arg(long, global = true)]
    html: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find similar perfumes
    Search {
        /// Perfume name
        name: String,

        /// Maximum number of results
        #[arg(long)]
        top_k: Option<u32>,

        /// Only show results at or below this price
        #[arg(long)]
        price_cap: Option<f64>,

        /// Include results that cost more than the original
        #[arg(long)]
        any_price: bool,

        /// If nothing cheaper matches, show the closest overall
        #[arg(long)]
        widen: bool,
    },
    /// List perfume names the service knows
    Names {
        /// Case-insensitive substring filter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Check the service is up
    Health,
}

/// Keeps only the last write, like the page's results element.
#[derive(Default)]
struct LastWrite(RefCell<String>);

impl ResultsContainer for LastWrite {
    fn replace(&self, html: String) {
        *self.0.borrow_mut() = html;
    }
}

fn client_for(config: &ClientConfig) -> Result<HttpDupeClient, ExitCode> {
    HttpDupeClient::new(&config.base_url).map_err(|e| {
        eprintln!("Invalid API url '{}': {e}", config.base_url);
        ExitCode::FAILURE
    })
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Could not encode JSON: {e}"),
    }
}

async fn run_search(
    cli: &Cli,
    config: ClientConfig,
    name: &str,
    widen: bool,
) -> Result<ExitCode, ExitCode> {
    let handler = SubmitHandler::new(client_for(&config)?);
    let form = config.form(name);
    let container = LastWrite::default();

    let view = if widen {
        let (view, widened) = handler.submit_or_widen(&form, &container).await;
        if widened {
            eprintln!("No cheaper close matches found. Showing closest overall:");
        }
        view
    } else {
        handler.submit(&form, &container).await
    };

    if cli.json {
        match view.outcome() {
            Some(Outcome::Listing { query, items }) => print_json(&serde_json::json!({
                "query": query,
                "results": items,
            })),
            _ => print_json(&serde_json::json!({ "error": view.to_text().trim_end() })),
        }
    } else if cli.html {
        println!("{}", container.0.borrow());
    } else {
        print!("{}", view.to_text());
    }

    let ok = matches!(&view, SearchView::Done(o) if o.is_listing());
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let cwd = std::env::current_dir().map_err(|e| {
        eprintln!("Could not determine current directory: {e}");
        ExitCode::FAILURE
    })?;
    let mut config = load_config(&cwd);
    if let Some(ref url) = cli.url {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    debug!(base_url = config.base_url.as_str(), "using dupe service");

    match &cli.command {
        Commands::Search { name, top_k, price_cap, any_price, widen } => {
            if let Some(k) = top_k {
                config.top_k = *k;
            }
            if price_cap.is_some() {
                config.price_cap = *price_cap;
            }
            if *any_price {
                config.cheaper_only = false;
            }
            run_search(&cli, config, name, *widen).await
        }
        Commands::Names { filter } => {
            let client = client_for(&config)?;
            let names = client.names().await.map_err(|e| {
                eprintln!("Could not list names: {e}");
                ExitCode::FAILURE
            })?;
            let needle = filter.as_deref().map(str::to_lowercase);
            let names: Vec<&String> = names
                .iter()
                .filter(|n| needle.as_ref().map_or(true, |f| n.to_lowercase().contains(f)))
                .collect();

            if cli.json {
                print_json(&names);
            } else {
                for n in &names {
                    println!("{n}");
                }
                eprintln!("\n{} names", names.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let client = client_for(&config)?;
            let status = client.health().await.map_err(|e| {
                eprintln!("{} is not healthy: {e}", client.base_url());
                ExitCode::FAILURE
            })?;
            if cli.json {
                print_json(&status);
            } else {
                let s = status.get("status").and_then(|v| v.as_str()).unwrap_or("unknown");
                println!("{}: {s}", client.base_url());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dupefinder=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Could not start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(cli)).unwrap_or_else(|code| code)
}
