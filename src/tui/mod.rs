//! Interactive product listing page
//!
//! Architecture:
//! - Main thread: input, debounce timer, rendering, all state changes
//! - Worker thread: runs catalog requests one at a time
//! - Communication via crossbeam channels (requests -> worker, outcomes <- worker)
//!
//! Layout:
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ 🛒 QKart     │ 🔍 Search for items/categories │              │
//! ├─────────────────────────────────────────────────────────────┤
//! │          India’s FASTEST DELIVERY to your door step         │
//! │ ╭──────────────────────────╮ ╭──────────────────────────╮   │
//! │ │ iPhone XR                │ │ Basketball               │   │
//! │ │ 📱 Phones                │ │ ⚽ Sports                │   │
//! │ │ $100                     │ │ $100                     │   │
//! │ │ ★★★★☆                    │ │ ★★★★★                    │   │
//! │ │      🛒 ADD TO CART      │ │      🛒 ADD TO CART      │   │
//! │ ╰──────────────────────────╯ ╰──────────────────────────╯   │
//! │ QKart is your one stop solution ...                         │
//! │ 2 products                          Tab:Products  Ctrl+Q    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod card;
pub mod colors;
pub mod grid;
pub mod search;
pub mod ui;
mod worker;

pub use app::App;

use crate::catalog::CatalogSource;
use crate::config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

/// Run the TUI until the user quits
pub fn run(source: Arc<dyn CatalogSource>, config: &Config) -> crate::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, config);
    tracing::info!(endpoint = %config.endpoint, "storefront opened");

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
