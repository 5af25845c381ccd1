//! QKart CLI
//!
//! Opens the interactive storefront by default, with one-shot `list` and
//! `search` commands for scripting.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use qkart::view::{EMPTY_MESSAGE, LOADING_MESSAGE};
use qkart::{
    format_cost, CatalogSource, Config, HttpCatalog, Overrides, RequestKind, Resolution, Screen,
    ViewState,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// QKart - terminal storefront
///
/// Browse the QKart product catalog with a debounced search.
#[derive(Parser)]
#[command(name = "qkart")]
#[command(author = "QKart Contributors")]
#[command(version)]
#[command(about = "Terminal storefront for the QKart catalog", long_about = None)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8082/api/v1
    #[arg(long, env = "QKART_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Quiet period before a search is sent, in milliseconds
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    /// Log file for the interactive view (default: qkart.log next to the binary)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive product page (default)
    Browse,

    /// Print the full catalog
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Output::Text)]
        output: Output,
    },

    /// Search the catalog once and print the matches
    Search {
        /// Search text (use -- before text if it starts with -)
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Output::Text)]
        output: Output,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> qkart::Result<()> {
    let overrides = Overrides {
        endpoint: cli.endpoint,
        debounce_ms: cli.debounce_ms,
    };
    let config = Config::load(cli.config.as_deref(), &overrides)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse(&config, cli.log_file),
        Commands::List { output } => cmd_fetch(&config, RequestKind::LoadAll, output),
        Commands::Search { text, output } => cmd_fetch(&config, RequestKind::Search(text), output),
    }
}

/// Interactive page
fn cmd_browse(config: &Config, log_file: Option<PathBuf>) -> qkart::Result<()> {
    if let Some(path) = qkart::logging::init(log_file.as_deref()) {
        tracing::info!(log = %path.display(), version = qkart::VERSION, "QKart starting up");
    }

    let catalog: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(config)?);
    qkart::tui::run(catalog, config)
}

/// One-shot list or search
fn cmd_fetch(config: &Config, kind: RequestKind, output: Output) -> qkart::Result<()> {
    qkart::logging::init_stderr();

    let catalog = HttpCatalog::new(config)?;
    let mut view = ViewState::new();
    if let RequestKind::Search(text) = &kind {
        view.set_search_text(text.as_str());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let seq = view.begin(&kind);
    let result = match &kind {
        RequestKind::LoadAll => catalog.load_all(),
        RequestKind::Search(text) => catalog.search(text),
    };
    let resolution = view.resolve(seq, &kind, result);
    spinner.finish_and_clear();

    if let Resolution::Failed(notification) = resolution {
        eprintln!("{} {}", style("Error:").red().bold(), notification.message);
        std::process::exit(1);
    }

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(view.products())?);
        }
        Output::Text => print_products(&view, catalog.endpoint(), start.elapsed()),
    }

    Ok(())
}

fn print_products(view: &ViewState, endpoint: &str, elapsed: Duration) {
    let screen = view.screen();
    match screen {
        Screen::Loading => {}
        Screen::Empty => {
            println!("{} {}", style("☹").dim(), EMPTY_MESSAGE);
        }
        Screen::Grid(_) => {
            let cards = screen.cards();
            println!(
                "{} {} products from {} in {}",
                style("✓").green().bold(),
                cards.len(),
                style(endpoint).cyan(),
                HumanDuration(elapsed)
            );
            println!();
            for card in cards {
                println!(
                    "  {:<32} {:<14} {:>8}  {}  {}",
                    style(&card.name).bold(),
                    card.category,
                    style(format_cost(card.cost)).yellow(),
                    style(card.rating.to_string()).yellow(),
                    style(&card.id).dim()
                );
            }
        }
    }
}
